//! Offices and rooms.

use super::{Kind, Operation, Param, Verb};

pub(super) const OPERATIONS: &[Operation] = &[
    Operation {
        name: "plan_get",
        verb: Verb::Get,
        path: "/api/v2/offices/{office_id}/plan",
        tag: "offices",
        important: false,
        summary: "Retrieves the plan details for a specified office identified by its office_id.",
        params: &[
            Param::path("office_id", Kind::String, "office_id"),
        ],
    },
    Operation {
        name: "callcenters_list",
        verb: Verb::Get,
        path: "/api/v2/offices/{office_id}/callcenters",
        tag: "offices",
        important: false,
        summary: "Retrieves a list of call centers associated with a specific office, supporting pagination via a cursor parameter.",
        params: &[
            Param::path("office_id", Kind::String, "office_id"),
            Param::query("cursor", Kind::String, "A string token used to fetch the next or previous page of call center records after a specific position in the results list."),
        ],
    },
    Operation {
        name: "coaching_team_list",
        verb: Verb::Get,
        path: "/api/v2/offices/{office_id}/teams",
        tag: "offices",
        important: false,
        summary: "Retrieves a list of teams associated with a specific office, identified by the office ID provided in the path, with optional pagination using the cursor query parameter.",
        params: &[
            Param::path("office_id", Kind::String, "office_id"),
            Param::query("cursor", Kind::String, "A unique identifier used for cursor-based pagination to fetch the next page of teams data, typically based on a timestamp or other unique criteria."),
        ],
    },
    Operation {
        name: "departments_list",
        verb: Verb::Get,
        path: "/api/v2/offices/{office_id}/departments",
        tag: "offices",
        important: false,
        summary: "Retrieves a list of departments associated with a specific office identified by the provided office ID.",
        params: &[
            Param::path("office_id", Kind::String, "office_id"),
            Param::query("cursor", Kind::String, "A unique identifier or token provided by the server that marks the position in the paginated list of departments, enabling retrieval of the next or previous set of results when making subsequent API requests."),
        ],
    },
    Operation {
        name: "numbers_assign_office_number_post",
        verb: Verb::Post,
        path: "/api/v2/offices/{id}/assign_number",
        tag: "offices",
        important: false,
        summary: "Assigns a phone number to an office identified by the specified ID using a JSON request body.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("area_code", Kind::String, "An area code in which to find an available phone number for assignment."),
            Param::body("number", Kind::String, "A phone number to assign."),
            Param::body("primary", Kind::Boolean, "A boolean indicating whether this should become the primary phone number."),
        ],
    },
    Operation {
        name: "numbers_office_unassign_number_post",
        verb: Verb::Post,
        path: "/api/v2/offices/{id}/unassign_number",
        tag: "offices",
        important: false,
        summary: "Unassigns a phone number from an office using the POST method by specifying the office ID in the path and providing additional details in the JSON request body.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("number", Kind::String, "A phone number to unassign."),
        ],
    },
    Operation {
        name: "offices_e911_get",
        verb: Verb::Get,
        path: "/api/v2/offices/{id}/e911",
        tag: "offices",
        important: false,
        summary: "Retrieves Enhanced 911 (E911) information for a specific office identified by the provided office ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "offices_e911_update",
        verb: Verb::Put,
        path: "/api/v2/offices/{id}/e911",
        tag: "offices",
        important: false,
        summary: "Updates or replaces the E911 configuration for the specified office using the provided data in the request body.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("address", Kind::String, "Line 1 of the new E911 address."),
            Param::body("address2", Kind::String, "Line 2 of the new E911 address."),
            Param::body("city", Kind::String, "City of the new E911 address."),
            Param::body("country", Kind::String, "Country of the new E911 address."),
            Param::body("state", Kind::String, "State or Province of the new E911 address."),
            Param::body("update_all", Kind::Boolean, "Update E911 for all users in this office."),
            Param::body("use_validated_option", Kind::Boolean, "Whether to use the validated address option from our service."),
            Param::body("zip", Kind::String, "Zip code of the new E911 address."),
        ],
    },
    Operation {
        name: "plan_available_licenses_get",
        verb: Verb::Get,
        path: "/api/v2/offices/{office_id}/available_licenses",
        tag: "offices",
        important: false,
        summary: "Retrieves the available licenses for a specific office identified by its ID.",
        params: &[
            Param::path("office_id", Kind::String, "office_id"),
        ],
    },
    Operation {
        name: "offices_offdutystatuses_get",
        verb: Verb::Get,
        path: "/api/v2/offices/{id}/offdutystatuses",
        tag: "offices",
        important: false,
        summary: "Retrieves a list of off-duty statuses for the specified office, identified by its ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "offices_get",
        verb: Verb::Get,
        path: "/api/v2/offices/{id}",
        tag: "offices",
        important: false,
        summary: "Retrieves details about a specific office by ID using the API.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "offices_list",
        verb: Verb::Get,
        path: "/api/v2/offices",
        tag: "offices",
        important: false,
        summary: "Retrieves a list of offices, optionally filtering by active status and supporting pagination with a cursor parameter.",
        params: &[
            Param::query("cursor", Kind::String, "A token representing the current position in the dataset, used to fetch the next or previous page of results in cursor-based pagination."),
            Param::query("active_only", Kind::Boolean, "If set to true, returns only active offices; if omitted or false, returns all offices regardless of status."),
        ],
    },
    Operation {
        name: "offices_create",
        verb: Verb::Post,
        path: "/api/v2/offices",
        tag: "offices",
        important: false,
        summary: "Creates a new office using the provided JSON data in the request body.",
        params: &[
            Param::body("annual_commit_monthly_billing", Kind::Boolean, "A flag indicating if the primary office's plan is categorized as annual commit monthly billing."),
            Param::body("auto_call_recording", Kind::Boolean, "Whether or not automatically record all calls of this office."),
            Param::body("billing_address", Kind::Object, "billing_address"),
            Param::body("billing_contact", Kind::Object, "billing_contact"),
            Param::body("country", Kind::String, "The office country."),
            Param::body("currency", Kind::String, "The office's billing currency."),
            Param::body("e911_address", Kind::Object, "e911_address"),
            Param::body("first_action", Kind::String, "The desired action when the office receives a call."),
            Param::body("friday_hours", Kind::Array, "The Friday hours of operation."),
            Param::body("group_description", Kind::String, "The description of the office."),
            Param::body("hours_on", Kind::Boolean, "The time frame when the office wants to receive calls."),
            Param::body("international_enabled", Kind::Boolean, "A flag indicating if the primary office is able to make international phone calls."),
            Param::body("invoiced", Kind::Boolean, "A flag indicating if the payment will be paid by invoice."),
            Param::body("mainline_number", Kind::String, "The mainline of the office."),
            Param::body("monday_hours", Kind::Array, "The Monday hours of operation."),
            Param::body("name", Kind::String, "The office name."),
            Param::body("no_operators_action", Kind::String, "The action to take if there is no one available to answer calls."),
            Param::body("plan_period", Kind::String, "The frequency at which the company will be billed."),
            Param::body("ring_seconds", Kind::Integer, "The number of seconds to allow the group line to ring before going to voicemail."),
            Param::body("routing_options", Kind::Object, "routing_options"),
            Param::body("saturday_hours", Kind::Array, "The Saturday hours of operation."),
            Param::body("sunday_hours", Kind::Array, "The Sunday hours of operation."),
            Param::body("thursday_hours", Kind::Array, "The Thursday hours of operation."),
            Param::body("timezone", Kind::String, "Timezone using a tz database name."),
            Param::body("tuesday_hours", Kind::Array, "The Tuesday hours of operation."),
            Param::body("unified_billing", Kind::Boolean, "A flag indicating if to send a unified invoice."),
            Param::body("use_same_address", Kind::Boolean, "A flag indicating if the billing address and the emergency address are the same."),
            Param::body("voice_intelligence", Kind::Object, "voice_intelligence"),
            Param::body("wednesday_hours", Kind::Array, "The Wednesday hours of operation."),
        ],
    },
    Operation {
        name: "offices_operators_delete",
        verb: Verb::Delete,
        path: "/api/v2/offices/{id}/operators",
        tag: "offices",
        important: false,
        summary: "Deletes the specified operator(s) associated with the office whose ID is provided in the path, returning a success status upon completion.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("operator_id", Kind::Integer, "ID of the operator to remove."),
            Param::body("operator_type", Kind::String, "Type of the operator to remove (`user` or `room`)."),
        ],
    },
    Operation {
        name: "offices_operators_get",
        verb: Verb::Get,
        path: "/api/v2/offices/{id}/operators",
        tag: "offices",
        important: false,
        summary: "Get the list of operators associated with the specified office by its ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "offices_operators_post",
        verb: Verb::Post,
        path: "/api/v2/offices/{id}/operators",
        tag: "offices",
        important: false,
        summary: "Creates a new operator resource within the specified office using the provided data and returns a success status.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("operator_id", Kind::Integer, "ID of the operator to add."),
            Param::body("operator_type", Kind::String, "Type of the operator to add."),
            Param::body("role", Kind::String, "The role of the new operator."),
        ],
    },
    Operation {
        name: "numbers_assign_room_number_post",
        verb: Verb::Post,
        path: "/api/v2/rooms/{id}/assign_number",
        tag: "rooms",
        important: false,
        summary: "Assigns a number to the specified room and returns a success status.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("area_code", Kind::String, "An area code in which to find an available phone number for assignment."),
            Param::body("number", Kind::String, "A phone number to assign."),
            Param::body("primary", Kind::Boolean, "A boolean indicating whether this should become the primary phone number."),
        ],
    },
    Operation {
        name: "numbers_room_unassign_number_post",
        verb: Verb::Post,
        path: "/api/v2/rooms/{id}/unassign_number",
        tag: "rooms",
        important: false,
        summary: "Unassigns a phone number from a room using the API and returns a success status.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("number", Kind::String, "A phone number to unassign."),
        ],
    },
    Operation {
        name: "rooms_delete",
        verb: Verb::Delete,
        path: "/api/v2/rooms/{id}",
        tag: "rooms",
        important: false,
        summary: "Deletes a room by its ID and returns a successful response.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "rooms_get",
        verb: Verb::Get,
        path: "/api/v2/rooms/{id}",
        tag: "rooms",
        important: false,
        summary: "Retrieves details of a specific room identified by its ID using the GET method.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "rooms_patch",
        verb: Verb::Patch,
        path: "/api/v2/rooms/{id}",
        tag: "rooms",
        important: false,
        summary: "Updates a room with the specified ID by partially modifying its properties using the provided JSON payload.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("name", Kind::String, "The name of the room."),
            Param::body("phone_numbers", Kind::Array, "A list of all phone numbers assigned to the room."),
        ],
    },
    Operation {
        name: "rooms_list",
        verb: Verb::Get,
        path: "/api/v2/rooms",
        tag: "rooms",
        important: false,
        summary: "Retrieves a list of rooms, optionally filtered by office ID, using the provided cursor for pagination.",
        params: &[
            Param::query("cursor", Kind::String, "An opaque string used for cursor-based pagination to specify the position in the dataset, allowing for incremental fetching of data in a specific order."),
            Param::query("office_id", Kind::Integer, "Optional integer parameter to filter rooms by the specified office ID."),
        ],
    },
    Operation {
        name: "rooms_post",
        verb: Verb::Post,
        path: "/api/v2/rooms",
        tag: "rooms",
        important: false,
        summary: "Creates a new room resource and returns a success response upon completion.",
        params: &[
            Param::body("name", Kind::String, "The name of the room."),
            Param::body("office_id", Kind::Integer, "The office in which this room resides."),
        ],
    },
    Operation {
        name: "deskphones_rooms_create_international_pin",
        verb: Verb::Post,
        path: "/api/v2/rooms/international_pin",
        tag: "rooms",
        important: false,
        summary: "Creates an international PIN for a room and returns the result.",
        params: &[
            Param::body("customer_ref", Kind::String, "An identifier to be printed in the usage summary."),
        ],
    },
    Operation {
        name: "deskphones_rooms_delete",
        verb: Verb::Delete,
        path: "/api/v2/rooms/{parent_id}/deskphones/{id}",
        tag: "rooms",
        important: false,
        summary: "Deletes a deskphone with the specified ID from a room with the given parent ID using the DELETE method.",
        params: &[
            Param::path("parent_id", Kind::String, "parent_id"),
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "deskphones_rooms_get",
        verb: Verb::Get,
        path: "/api/v2/rooms/{parent_id}/deskphones/{id}",
        tag: "rooms",
        important: false,
        summary: "Retrieves details of a specific desk phone identified by `{id}` within a room associated with `{parent_id}`.",
        params: &[
            Param::path("parent_id", Kind::String, "parent_id"),
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "deskphones_rooms_list",
        verb: Verb::Get,
        path: "/api/v2/rooms/{parent_id}/deskphones",
        tag: "rooms",
        important: false,
        summary: "Retrieves a list of desk phones associated with a specific room, identified by the parent ID.",
        params: &[
            Param::path("parent_id", Kind::String, "parent_id"),
        ],
    },
];
