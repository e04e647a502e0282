//! Users, user devices, contacts and channels.

use super::{Kind, Operation, Param, Verb};

pub(super) const OPERATIONS: &[Operation] = &[
    Operation {
        name: "channels_delete",
        verb: Verb::Delete,
        path: "/api/v2/channels/{id}",
        tag: "channels",
        important: false,
        summary: "Deletes the channel identified by the specified ID and returns a status response confirming the deletion.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "channels_get",
        verb: Verb::Get,
        path: "/api/v2/channels/{id}",
        tag: "channels",
        important: false,
        summary: "Retrieves information about a specific channel by its ID using the GET method.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "channels_list",
        verb: Verb::Get,
        path: "/api/v2/channels",
        tag: "channels",
        important: false,
        summary: "Retrieves a paginated list of channels, optionally filtered by state, using the provided cursor for pagination.",
        params: &[
            Param::query("cursor", Kind::String, "Optional string parameter used for cursor-based pagination, specifying the position from which to retrieve the next set of results."),
            Param::query("state", Kind::String, "An optional string parameter indicating the state of the channels to be retrieved."),
        ],
    },
    Operation {
        name: "channels_post",
        verb: Verb::Post,
        path: "/api/v2/channels",
        tag: "channels",
        important: false,
        summary: "Creates a new channel by submitting channel details in JSON format.",
        params: &[
            Param::body("description", Kind::String, "The description of the channel."),
            Param::body("name", Kind::String, "The name of the channel."),
            Param::body("privacy_type", Kind::String, "The privacy type of the channel."),
            Param::body("user_id", Kind::Integer, "The ID of the user who owns the channel."),
        ],
    },
    Operation {
        name: "channels_members_delete",
        verb: Verb::Delete,
        path: "/api/v2/channels/{id}/members",
        tag: "channels",
        important: false,
        summary: "Removes a member from a channel specified by the given ID using the DELETE method.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("user_id", Kind::Integer, "The user id."),
        ],
    },
    Operation {
        name: "channels_members_list",
        verb: Verb::Get,
        path: "/api/v2/channels/{id}/members",
        tag: "channels",
        important: false,
        summary: "Get a list of members in a specific channel, optionally paginated using a cursor.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::query("cursor", Kind::String, "An opaque token used for cursor-based pagination, indicating the position from which to fetch the next set of members in the channel."),
        ],
    },
    Operation {
        name: "channels_members_post",
        verb: Verb::Post,
        path: "/api/v2/channels/{id}/members",
        tag: "channels",
        important: false,
        summary: "Adds a member to a channel specified by the provided ID using the provided JSON data.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("user_id", Kind::Integer, "The user id."),
        ],
    },
    Operation {
        name: "contacts_delete",
        verb: Verb::Delete,
        path: "/api/v2/contacts/{id}",
        tag: "contacts",
        important: false,
        summary: "Deletes a specific contact by ID and removes all associated list memberships for that contact.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "contacts_get",
        verb: Verb::Get,
        path: "/api/v2/contacts/{id}",
        tag: "contacts",
        important: false,
        summary: "Retrieves detailed information for a specific contact identified by the given ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "contacts_update",
        verb: Verb::Patch,
        path: "/api/v2/contacts/{id}",
        tag: "contacts",
        important: false,
        summary: "Partially updates the contact resource identified by the given ID with the provided JSON data.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("company_name", Kind::String, "The contact's company name."),
            Param::body("emails", Kind::Array, "The contact's emails."),
            Param::body("extension", Kind::String, "The contact's extension number."),
            Param::body("first_name", Kind::String, "The contact's first name."),
            Param::body("job_title", Kind::String, "The contact's job title."),
            Param::body("last_name", Kind::String, "The contact's last name."),
            Param::body("phones", Kind::Array, "The contact's phone numbers."),
            Param::body("trunk_group", Kind::String, "[Deprecated]"),
            Param::body("urls", Kind::Array, "A list of websites associated with or belonging to this contact."),
        ],
    },
    Operation {
        name: "contacts_list",
        verb: Verb::Get,
        path: "/api/v2/contacts",
        tag: "contacts",
        important: false,
        summary: "Retrieves a paginated list of contacts, optionally filtered by owner and local inclusion status.",
        params: &[
            Param::query("cursor", Kind::String, "Specifies the opaque token or unique identifier used to retrieve the next or previous page of contacts in cursor-based pagination; include this value to continue fetching results from where the previous page ended."),
            Param::query("include_local", Kind::Boolean, "Optional boolean parameter to include local contacts in the response."),
            Param::query("owner_id", Kind::String, "Optional string parameter to filter contacts by the ID of their owner."),
        ],
    },
    Operation {
        name: "contacts_create",
        verb: Verb::Post,
        path: "/api/v2/contacts",
        tag: "contacts",
        important: false,
        summary: "Creates or updates one or multiple contacts by submitting their data in JSON format to the server.",
        params: &[
            Param::body("company_name", Kind::String, "The contact's company name."),
            Param::body("emails", Kind::Array, "The contact's emails."),
            Param::body("extension", Kind::String, "The contact's extension number."),
            Param::body("first_name", Kind::String, "The contact's first name."),
            Param::body("job_title", Kind::String, "The contact's job title."),
            Param::body("last_name", Kind::String, "The contact's last name."),
            Param::body("owner_id", Kind::String, "The id of the user who will own this contact."),
            Param::body("phones", Kind::Array, "The contact's phone numbers."),
            Param::body("trunk_group", Kind::String, "[Deprecated]"),
            Param::body("urls", Kind::Array, "A list of websites associated with or belonging to this contact."),
        ],
    },
    Operation {
        name: "contacts_create_with_uid",
        verb: Verb::Put,
        path: "/api/v2/contacts",
        tag: "contacts",
        important: false,
        summary: "Updates or replaces the entire contact resource at the specified path with the provided request data, returning a status code on success.",
        params: &[
            Param::body("company_name", Kind::String, "The contact's company name."),
            Param::body("emails", Kind::Array, "The contact's emails."),
            Param::body("extension", Kind::String, "The contact's extension number."),
            Param::body("first_name", Kind::String, "The contact's first name."),
            Param::body("job_title", Kind::String, "The contact's job title."),
            Param::body("last_name", Kind::String, "The contact's last name."),
            Param::body("phones", Kind::Array, "The contact's phone numbers."),
            Param::body("trunk_group", Kind::String, "[Deprecated]"),
            Param::body("uid", Kind::String, "The unique id to be included as part of the contact's generated id."),
            Param::body("urls", Kind::Array, "A list of websites associated with or belonging to this contact."),
        ],
    },
    Operation {
        name: "userdevices_get",
        verb: Verb::Get,
        path: "/api/v2/userdevices/{id}",
        tag: "userdevices",
        important: false,
        summary: "Retrieves details about a user device specified by its ID using the GET method.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "userdevices_list",
        verb: Verb::Get,
        path: "/api/v2/userdevices",
        tag: "userdevices",
        important: false,
        summary: "Retrieves a list of user devices, optionally filtered by a user ID or a cursor for pagination.",
        params: &[
            Param::query("cursor", Kind::String, "A string value used as a pointer to fetch the next or previous paginated set of user devices, enabling efficient traversal through large datasets without numeric offsets."),
            Param::query("user_id", Kind::String, "Specifies the unique identifier of the user for filtering the devices returned in the query."),
        ],
    },
    Operation {
        name: "users_initiate_call",
        verb: Verb::Post,
        path: "/api/v2/users/{id}/initiate_call",
        tag: "users",
        important: false,
        summary: "Initiates a call for a user identified by the provided ID using the POST method, sending JSON data in the request body.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("custom_data", Kind::String, "Extra data to associate with the call."),
            Param::body("group_id", Kind::Integer, "The ID of a group that will be used to initiate the call."),
            Param::body("group_type", Kind::String, "The type of a group that will be used to initiate the call."),
            Param::body("outbound_caller_id", Kind::String, "The e164-formatted number shown to the call recipient (or \"blocked\")."),
            Param::body("phone_number", Kind::String, "The e164-formatted number to call."),
        ],
    },
    Operation {
        name: "users_update_active_call",
        verb: Verb::Patch,
        path: "/api/v2/users/{id}/activecall",
        tag: "users",
        important: false,
        summary: "Updates the active call status for a user with the specified ID using the PATCH method and returns a status message.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("is_recording", Kind::Boolean, "Whether or not recording should be enabled."),
            Param::body("play_message", Kind::Boolean, "Whether or not to play a message to indicate the call is being recorded (or recording has stopped)."),
            Param::body("recording_type", Kind::String, "Whether or not to toggle recording for the operator call (personal recording), the group call (department recording), or both."),
        ],
    },
    Operation {
        name: "users_toggle_call_vi",
        verb: Verb::Patch,
        path: "/api/v2/users/{id}/togglevi",
        tag: "users",
        important: false,
        summary: "Toggles the \"vi\" setting for a user with the specified ID using the PATCH method.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("enable_vi", Kind::Boolean, "Whether or not call vi should be enabled."),
        ],
    },
    Operation {
        name: "caller_id_users_get",
        verb: Verb::Get,
        path: "/api/v2/users/{id}/caller_id",
        tag: "users",
        important: false,
        summary: "Retrieves the caller ID information for a user identified by the provided ID using the GET method.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "caller_id_users_post",
        verb: Verb::Post,
        path: "/api/v2/users/{id}/caller_id",
        tag: "users",
        important: false,
        summary: "Updates the caller ID for a user with the specified ID using a JSON payload and returns a successful response upon completion.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("caller_id", Kind::String, "Phone number (e164 formatted) that will be defined as a Caller ID for the target."),
        ],
    },
    Operation {
        name: "deskphones_users_delete",
        verb: Verb::Delete,
        path: "/api/v2/users/{parent_id}/deskphones/{id}",
        tag: "users",
        important: false,
        summary: "Deletes a specific deskphone associated with a user identified by the parent ID and deskphone ID using the DELETE method.",
        params: &[
            Param::path("parent_id", Kind::String, "parent_id"),
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "deskphones_users_get",
        verb: Verb::Get,
        path: "/api/v2/users/{parent_id}/deskphones/{id}",
        tag: "users",
        important: false,
        summary: "Retrieves details of a specific desk phone associated with a user, identified by the parent ID and desk phone ID.",
        params: &[
            Param::path("parent_id", Kind::String, "parent_id"),
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "deskphones_users_list",
        verb: Verb::Get,
        path: "/api/v2/users/{parent_id}/deskphones",
        tag: "users",
        important: false,
        summary: "Retrieves a list of desk phones associated with a specific parent ID.",
        params: &[
            Param::path("parent_id", Kind::String, "parent_id"),
        ],
    },
    Operation {
        name: "numbers_assign_user_number_post",
        verb: Verb::Post,
        path: "/api/v2/users/{id}/assign_number",
        tag: "users",
        important: true,
        summary: "Assigns a number to the user identified by the given ID using a POST request with JSON payload and returns a 200 status on success.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("area_code", Kind::String, "An area code in which to find an available phone number for assignment."),
            Param::body("number", Kind::String, "A phone number to assign."),
            Param::body("primary", Kind::Boolean, "A boolean indicating whether this should become the primary phone number."),
        ],
    },
    Operation {
        name: "numbers_user_unassign_number_post",
        verb: Verb::Post,
        path: "/api/v2/users/{id}/unassign_number",
        tag: "users",
        important: false,
        summary: "Unassigns a phone number from a user using the POST method by providing the user ID in the path and the necessary details in the JSON request body.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("number", Kind::String, "A phone number to unassign."),
        ],
    },
    Operation {
        name: "users_toggle_dnd",
        verb: Verb::Patch,
        path: "/api/v2/users/{id}/togglednd",
        tag: "users",
        important: false,
        summary: "Toggles the DND status for a user with the specified ID using the PATCH method, accepting a JSON payload.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("do_not_disturb", Kind::Boolean, "Determines if DND is ON or OFF."),
            Param::body("group_id", Kind::Integer, "The ID of the group which the user's DND status will be updated for."),
            Param::body("group_type", Kind::String, "The type of the group which the user's DND status will be updated for."),
        ],
    },
    Operation {
        name: "users_e911_get",
        verb: Verb::Get,
        path: "/api/v2/users/{id}/e911",
        tag: "users",
        important: false,
        summary: "Retrieves the Enhanced 911 (E911) information for a specific user identified by their ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "users_e911_update",
        verb: Verb::Put,
        path: "/api/v2/users/{id}/e911",
        tag: "users",
        important: false,
        summary: "Updates the E911 (Enhanced 911) location information for a user identified by the specified ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("address", Kind::String, "Line 1 of the new E911 address."),
            Param::body("address2", Kind::String, "Line 2 of the new E911 address."),
            Param::body("city", Kind::String, "City of the new E911 address."),
            Param::body("country", Kind::String, "Country of the new E911 address."),
            Param::body("state", Kind::String, "State or Province of the new E911 address."),
            Param::body("use_validated_option", Kind::Boolean, "Whether to use the validated address option from our service."),
            Param::body("zip", Kind::String, "Zip of the new E911 address."),
        ],
    },
    Operation {
        name: "users_personas_get",
        verb: Verb::Get,
        path: "/api/v2/users/{id}/personas",
        tag: "users",
        important: false,
        summary: "Retrieves the personas associated with a user identified by the provided `{id}` parameter using the `GET` method.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "screen_pop_initiate",
        verb: Verb::Post,
        path: "/api/v2/users/{id}/screenpop",
        tag: "users",
        important: false,
        summary: "Triggers a screen pop for the specified user by their ID, requiring a JSON request body, and returns a success status upon completion.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("screen_pop_uri", Kind::String, "The screen pop's url."),
        ],
    },
    Operation {
        name: "users_delete",
        verb: Verb::Delete,
        path: "/api/v2/users/{id}",
        tag: "users",
        important: true,
        summary: "Deletes a user with the specified ID from the system, potentially removing associated data and roles.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "users_get",
        verb: Verb::Get,
        path: "/api/v2/users/{id}",
        tag: "users",
        important: false,
        summary: "Retrieves the details of a specific user identified by the provided ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "users_update",
        verb: Verb::Patch,
        path: "/api/v2/users/{id}",
        tag: "users",
        important: false,
        summary: "Partially updates the user identified by the given ID with the specified JSON data and returns a success response.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("admin_office_ids", Kind::Array, "The list of admin office IDs."),
            Param::body("emails", Kind::Array, "The user's emails."),
            Param::body("extension", Kind::String, "The user's new extension number."),
            Param::body("first_name", Kind::String, "The user's first name."),
            Param::body("forwarding_numbers", Kind::Array, "A list of phone numbers that should be dialed in addition to the user's Dialpad number(s) upon receiving a call."),
            Param::body("is_super_admin", Kind::Boolean, "Whether or not the user is a super admin."),
            Param::body("job_title", Kind::String, "The user's job title."),
            Param::body("keep_paid_numbers", Kind::Boolean, "Whether or not to keep phone numbers when switching to a support license."),
            Param::body("last_name", Kind::String, "The user's last name."),
            Param::body("license", Kind::String, "The user's license type."),
            Param::body("office_id", Kind::Integer, "The user's office id."),
            Param::body("phone_numbers", Kind::Array, "A list of the phone number(s) assigned to this user."),
            Param::body("presence_status", Kind::Object, "presence_status"),
            Param::body("state", Kind::String, "The user's state."),
        ],
    },
    Operation {
        name: "users_list",
        verb: Verb::Get,
        path: "/api/v2/users",
        tag: "users",
        important: false,
        summary: "Retrieves a list of users with optional filtering by cursor, state, company admin status, email, or number using the \"/api/v2/users\" GET endpoint.",
        params: &[
            Param::query("cursor", Kind::String, "A string token used to fetch the next page of users after the specified cursor in paginated results."),
            Param::query("state", Kind::String, "Filters users by their account state, accepting values: active, all, cancelled, deleted, pending, or suspended."),
            Param::query("company_admin", Kind::Boolean, "Filters the user list to only include users who are company administrators if set to true."),
            Param::query("email", Kind::String, "Optional query parameter to filter users by email address."),
            Param::query("number", Kind::String, "An optional string parameter to specify a custom number for filtering or querying users."),
        ],
    },
    Operation {
        name: "users_create",
        verb: Verb::Post,
        path: "/api/v2/users",
        tag: "users",
        important: false,
        summary: "Creates a new user resource using JSON data and returns a success response with a status code of 200 OK.",
        params: &[
            Param::body("auto_assign", Kind::Boolean, "If set to true, a number will be automatically assigned."),
            Param::body("email", Kind::String, "The user's email."),
            Param::body("first_name", Kind::String, "The user's first name."),
            Param::body("last_name", Kind::String, "The user's last name."),
            Param::body("license", Kind::String, "The user's license type."),
            Param::body("office_id", Kind::Integer, "The user's office id."),
        ],
    },
    Operation {
        name: "users_move_office_patch",
        verb: Verb::Patch,
        path: "/api/v2/users/{id}/move_office",
        tag: "users",
        important: false,
        summary: "Updates the office location of a user with the specified ID using a JSON payload.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("office_id", Kind::Integer, "The user's office id."),
        ],
    },
    Operation {
        name: "users_update_status",
        verb: Verb::Patch,
        path: "/api/v2/users/{id}/status",
        tag: "users",
        important: false,
        summary: "Updates the status of a user with the specified ID using the PATCH method.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("expiration", Kind::Integer, "The expiration of this status."),
            Param::body("status_message", Kind::String, "The status message for the user."),
        ],
    },
];
