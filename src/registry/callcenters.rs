//! Call centers, departments, coaching teams and custom IVRs.

use super::{Kind, Operation, Param, Verb};

pub(super) const OPERATIONS: &[Operation] = &[
    Operation {
        name: "callcenters_listall",
        verb: Verb::Get,
        path: "/api/v2/callcenters",
        tag: "callcenters",
        important: false,
        summary: "Retrieves a list of call centers using the specified query parameters, such as cursor for pagination, office_id for filtering by office, and name_search for searching by name.",
        params: &[
            Param::query("cursor", Kind::String, "The cursor query parameter is an optional string used for cursor-based pagination to specify the position in the dataset from which to continue fetching the next page of results."),
            Param::query("office_id", Kind::Integer, "Optional integer parameter to filter call centers by a specific office ID."),
            Param::query("name_search", Kind::String, "Filters call centers by name using partial string matching (case-insensitive unless otherwise specified)."),
        ],
    },
    Operation {
        name: "callcenters_create",
        verb: Verb::Post,
        path: "/api/v2/callcenters",
        tag: "callcenters",
        important: false,
        summary: "Creates a new call center resource using JSON data and returns a successful response upon completion.",
        params: &[
            Param::body("advanced_settings", Kind::Object, "advanced_settings"),
            Param::body("alerts", Kind::Object, "alerts"),
            Param::body("friday_hours", Kind::Array, "The Friday hours of operation."),
            Param::body("group_description", Kind::String, "The description of the call center."),
            Param::body("hold_queue", Kind::Object, "hold_queue"),
            Param::body("hours_on", Kind::Boolean, "The time frame when the call center wants to receive calls."),
            Param::body("monday_hours", Kind::Array, "The Monday hours of operation."),
            Param::body("name", Kind::String, "The name of the call center."),
            Param::body("office_id", Kind::Integer, "The id of the office to which the call center belongs.."),
            Param::body("ring_seconds", Kind::Integer, "The number of seconds to allow the group line to ring before going to voicemail."),
            Param::body("routing_options", Kind::Object, "routing_options"),
            Param::body("saturday_hours", Kind::Array, "The Saturday hours of operation."),
            Param::body("sunday_hours", Kind::Array, "The Sunday hours of operation."),
            Param::body("thursday_hours", Kind::Array, "The Thursday hours of operation."),
            Param::body("tuesday_hours", Kind::Array, "The Tuesday hours of operation."),
            Param::body("voice_intelligence", Kind::Object, "voice_intelligence"),
            Param::body("wednesday_hours", Kind::Array, "The Wednesday hours of operation."),
        ],
    },
    Operation {
        name: "callcenters_delete",
        verb: Verb::Delete,
        path: "/api/v2/callcenters/{id}",
        tag: "callcenters",
        important: false,
        summary: "Deletes a call center identified by the specified ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "callcenters_get",
        verb: Verb::Get,
        path: "/api/v2/callcenters/{id}",
        tag: "callcenters",
        important: false,
        summary: "Retrieves details for the specified call center identified by its unique ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "callcenters_update",
        verb: Verb::Patch,
        path: "/api/v2/callcenters/{id}",
        tag: "callcenters",
        important: false,
        summary: "Updates partial properties of the call center resource identified by the given ID using a JSON Patch document.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("advanced_settings", Kind::Object, "advanced_settings"),
            Param::body("alerts", Kind::Object, "alerts"),
            Param::body("friday_hours", Kind::Array, "The Friday hours of operation."),
            Param::body("group_description", Kind::String, "The description of the call center."),
            Param::body("hold_queue", Kind::Object, "hold_queue"),
            Param::body("hours_on", Kind::Boolean, "The time frame when the call center wants to receive calls."),
            Param::body("monday_hours", Kind::Array, "The Monday hours of operation."),
            Param::body("name", Kind::String, "The name of the call center."),
            Param::body("ring_seconds", Kind::Integer, "The number of seconds to allow the group line to ring before going to voicemail."),
            Param::body("routing_options", Kind::Object, "routing_options"),
            Param::body("saturday_hours", Kind::Array, "The Saturday hours of operation."),
            Param::body("sunday_hours", Kind::Array, "The Sunday hours of operation."),
            Param::body("thursday_hours", Kind::Array, "The Thursday hours of operation."),
            Param::body("tuesday_hours", Kind::Array, "The Tuesday hours of operation."),
            Param::body("voice_intelligence", Kind::Object, "voice_intelligence"),
            Param::body("wednesday_hours", Kind::Array, "The Wednesday hours of operation."),
        ],
    },
    Operation {
        name: "callcenters_status",
        verb: Verb::Get,
        path: "/api/v2/callcenters/{id}/status",
        tag: "callcenters",
        important: false,
        summary: "Retrieves the status of a call center identified by the provided ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "callcenters_operators_get_dutystatus",
        verb: Verb::Get,
        path: "/api/v2/callcenters/operators/{id}/dutystatus",
        tag: "callcenters",
        important: false,
        summary: "Retrieves the duty status of a specific call center operator identified by the provided ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "callcenters_operators_dutystatus",
        verb: Verb::Patch,
        path: "/api/v2/callcenters/operators/{id}/dutystatus",
        tag: "callcenters",
        important: false,
        summary: "Updates the duty status of a call center operator with the specified ID using the PATCH method and returns a 200 OK response upon success.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("duty_status_reason", Kind::String, "A description of this status."),
            Param::body("on_duty", Kind::Boolean, "True if this status message indicates an \"on-duty\" status."),
        ],
    },
    Operation {
        name: "callcenters_operators_get_skilllevel",
        verb: Verb::Get,
        path: "/api/v2/callcenters/{call_center_id}/operators/{user_id}/skill",
        tag: "callcenters",
        important: false,
        summary: "Retrieves the skill information for a specific operator associated with a given call center.",
        params: &[
            Param::path("call_center_id", Kind::String, "call_center_id"),
            Param::path("user_id", Kind::String, "user_id"),
        ],
    },
    Operation {
        name: "callcenters_operators_skilllevel",
        verb: Verb::Patch,
        path: "/api/v2/callcenters/{call_center_id}/operators/{user_id}/skill",
        tag: "callcenters",
        important: false,
        summary: "Updates the skill information for a specific operator in a call center using the PATCH method, requiring a JSON payload with the updated details.",
        params: &[
            Param::path("call_center_id", Kind::String, "call_center_id"),
            Param::path("user_id", Kind::String, "user_id"),
            Param::body("skill_level", Kind::Integer, "New skill level to set the operator in the call center."),
        ],
    },
    Operation {
        name: "callcenters_operators_delete",
        verb: Verb::Delete,
        path: "/api/v2/callcenters/{id}/operators",
        tag: "callcenters",
        important: true,
        summary: "Deletes an operator associated with a specific call center identified by the provided ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("user_id", Kind::Integer, "ID of the operator to remove."),
        ],
    },
    Operation {
        name: "callcenters_operators_get",
        verb: Verb::Get,
        path: "/api/v2/callcenters/{id}/operators",
        tag: "callcenters",
        important: false,
        summary: "Retrieves the list of operators associated with the specified call center by its ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "callcenters_operators_post",
        verb: Verb::Post,
        path: "/api/v2/callcenters/{id}/operators",
        tag: "callcenters",
        important: false,
        summary: "Adds a new operator to the call center specified by the given ID using a JSON request body.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("keep_paid_numbers", Kind::Boolean, "Whether or not to keep phone numbers when switching to a support license."),
            Param::body("license_type", Kind::String, "The type of license to assign to the new operator if a license is required."),
            Param::body("role", Kind::String, "The role the user should assume."),
            Param::body("skill_level", Kind::Integer, "Skill level of the operator."),
            Param::body("user_id", Kind::Integer, "The ID of the user."),
        ],
    },
    Operation {
        name: "coaching_team_members_get",
        verb: Verb::Get,
        path: "/api/v2/coachingteams/{id}/members",
        tag: "coachingteams",
        important: false,
        summary: "Retrieves the members of a coaching team identified by the provided ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "coaching_team_members_add",
        verb: Verb::Post,
        path: "/api/v2/coachingteams/{id}/members",
        tag: "coachingteams",
        important: false,
        summary: "Adds a new member to a coaching team identified by the provided ID using the POST method and returns a status message.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("member_id", Kind::String, "The id of the user added to the coaching team."),
            Param::body("role", Kind::String, "The role of the user added."),
        ],
    },
    Operation {
        name: "coaching_team_get",
        verb: Verb::Get,
        path: "/api/v2/coachingteams/{id}",
        tag: "coachingteams",
        important: false,
        summary: "Retrieves information about a coaching team specified by its identifier using the GET method.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "coaching_team_listall",
        verb: Verb::Get,
        path: "/api/v2/coachingteams",
        tag: "coachingteams",
        important: false,
        summary: "Retrieves a list of coaching teams using the GET method, optionally allowing pagination with a cursor query parameter.",
        params: &[
            Param::query("cursor", Kind::String, "An opaque string token used for cursor-based pagination, indicating the starting point for retrieving the next set of results from the coaching teams list."),
        ],
    },
    Operation {
        name: "ivr_delete",
        verb: Verb::Delete,
        path: "/api/v2/customivrs/{target_type}/{target_id}/{ivr_type}",
        tag: "customivrs",
        important: false,
        summary: "Deletes a specific customer IVR configuration based on the target type, target ID, and IVR type using the provided JSON payload.",
        params: &[
            Param::path("target_type", Kind::String, "target_type"),
            Param::path("target_id", Kind::String, "target_id"),
            Param::path("ivr_type", Kind::String, "ivr_type"),
            Param::body("ivr_id", Kind::Integer, "The id of the ivr that you want to use for the ivr type."),
            Param::body("select_option", Kind::String, "For call center auto call recording only."),
        ],
    },
    Operation {
        name: "ivr_update",
        verb: Verb::Patch,
        path: "/api/v2/customivrs/{target_type}/{target_id}/{ivr_type}",
        tag: "customivrs",
        important: false,
        summary: "Modifies a custom IVR configuration using the PATCH method by updating specific properties for a target identified by type, ID, and IVR type.",
        params: &[
            Param::path("target_type", Kind::String, "target_type"),
            Param::path("target_id", Kind::String, "target_id"),
            Param::path("ivr_type", Kind::String, "ivr_type"),
            Param::body("ivr_id", Kind::Integer, "The id of the ivr that you want to use for the ivr type."),
            Param::body("select_option", Kind::String, "For call center auto call recording only."),
        ],
    },
    Operation {
        name: "custom_ivrs_get",
        verb: Verb::Get,
        path: "/api/v2/customivrs",
        tag: "customivrs",
        important: true,
        summary: "Retrieves custom IVR data based on the specified target type and ID, with optional pagination using a cursor.",
        params: &[
            Param::required_query("target_type", Kind::String, "Specifies the type of target for the custom IVR, with possible values including callcenter, callrouter, channel, coachinggroup, coachingteam, department, office, room, staffgroup, unknown, or user."),
            Param::required_query("target_id", Kind::Integer, "target_id is a required integer query parameter specifying the unique identifier of the target resource to retrieve custom IVR details."),
            Param::query("cursor", Kind::String, "**cursor**: An optional string parameter used for cursor-based pagination, indicating the position in the dataset from which to retrieve the next set of results."),
        ],
    },
    Operation {
        name: "ivr_create",
        verb: Verb::Post,
        path: "/api/v2/customivrs",
        tag: "customivrs",
        important: false,
        summary: "Creates a new custom IVR entry via API and returns a confirmation upon success.",
        params: &[
            Param::body("description", Kind::String, "The description of the new IVR."),
            Param::body("file", Kind::String, "An MP3 audio file."),
            Param::body("ivr_type", Kind::String, "Type of IVR."),
            Param::body("name", Kind::String, "The name of the new IVR."),
            Param::body("target_id", Kind::Integer, "The ID of the target to which you want to assign this IVR."),
            Param::body("target_type", Kind::String, "The type of the target to which you want to assign this IVR."),
        ],
    },
    Operation {
        name: "ivr_details_update",
        verb: Verb::Patch,
        path: "/api/v2/customivrs/{ivr_id}",
        tag: "customivrs",
        important: false,
        summary: "Updates a custom IVR configuration identified by the `ivr_id` using partial modifications specified in the JSON request body.",
        params: &[
            Param::path("ivr_id", Kind::String, "ivr_id"),
            Param::body("description", Kind::String, "The description of the IVR."),
            Param::body("name", Kind::String, "The name of this IVR."),
        ],
    },
    Operation {
        name: "departments_delete",
        verb: Verb::Delete,
        path: "/api/v2/departments/{id}",
        tag: "departments",
        important: false,
        summary: "Deletes the department identified by the specified ID from the system.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "departments_get",
        verb: Verb::Get,
        path: "/api/v2/departments/{id}",
        tag: "departments",
        important: false,
        summary: "Retrieves detailed information for a department by its ID using the GET method.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "departments_update",
        verb: Verb::Patch,
        path: "/api/v2/departments/{id}",
        tag: "departments",
        important: false,
        summary: "Updates a department partially using the provided JSON data at the specified department ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("auto_call_recording", Kind::Boolean, "Whether or not automatically record all calls of this department."),
            Param::body("friday_hours", Kind::Array, "The Friday hours of operation."),
            Param::body("group_description", Kind::String, "The description of the department."),
            Param::body("hold_queue", Kind::Object, "hold_queue"),
            Param::body("hours_on", Kind::Boolean, "The time frame when the department wants to receive calls."),
            Param::body("monday_hours", Kind::Array, "The Monday hours of operation."),
            Param::body("name", Kind::String, "The name of the department."),
            Param::body("ring_seconds", Kind::Integer, "The number of seconds to allow the group line to ring before going to voicemail."),
            Param::body("routing_options", Kind::Object, "routing_options"),
            Param::body("saturday_hours", Kind::Array, "The Saturday hours of operation."),
            Param::body("sunday_hours", Kind::Array, "The Sunday hours of operation."),
            Param::body("thursday_hours", Kind::Array, "The Thursday hours of operation."),
            Param::body("tuesday_hours", Kind::Array, "The Tuesday hours of operation."),
            Param::body("voice_intelligence", Kind::Object, "voice_intelligence"),
            Param::body("wednesday_hours", Kind::Array, "The Wednesday hours of operation."),
        ],
    },
    Operation {
        name: "departments_listall",
        verb: Verb::Get,
        path: "/api/v2/departments",
        tag: "departments",
        important: false,
        summary: "Retrieves a list of departments, optionally filtered by office ID or name, and supports pagination via cursor.",
        params: &[
            Param::query("cursor", Kind::String, "An opaque string used for cursor-based pagination, indicating the position in the list of results from which to fetch the next set of data."),
            Param::query("office_id", Kind::Integer, "An optional integer parameter specifying the office ID for filtering department results."),
            Param::query("name_search", Kind::String, "Optional string parameter to search for departments by name."),
        ],
    },
    Operation {
        name: "departments_create",
        verb: Verb::Post,
        path: "/api/v2/departments",
        tag: "departments",
        important: false,
        summary: "Creates a new department resource using the provided JSON data and returns a successful response if the operation is completed.",
        params: &[
            Param::body("auto_call_recording", Kind::Boolean, "Whether or not automatically record all calls of this department."),
            Param::body("friday_hours", Kind::Array, "The Friday hours of operation."),
            Param::body("group_description", Kind::String, "The description of the department."),
            Param::body("hold_queue", Kind::Object, "hold_queue"),
            Param::body("hours_on", Kind::Boolean, "The time frame when the department wants to receive calls."),
            Param::body("monday_hours", Kind::Array, "The Monday hours of operation."),
            Param::body("name", Kind::String, "The name of the department."),
            Param::body("office_id", Kind::Integer, "The id of the office to which the department belongs.."),
            Param::body("ring_seconds", Kind::Integer, "The number of seconds to allow the group line to ring before going to voicemail."),
            Param::body("routing_options", Kind::Object, "routing_options"),
            Param::body("saturday_hours", Kind::Array, "The Saturday hours of operation."),
            Param::body("sunday_hours", Kind::Array, "The Sunday hours of operation."),
            Param::body("thursday_hours", Kind::Array, "The Thursday hours of operation."),
            Param::body("tuesday_hours", Kind::Array, "The Tuesday hours of operation."),
            Param::body("voice_intelligence", Kind::Object, "voice_intelligence"),
            Param::body("wednesday_hours", Kind::Array, "The Wednesday hours of operation."),
        ],
    },
    Operation {
        name: "departments_operators_delete",
        verb: Verb::Delete,
        path: "/api/v2/departments/{id}/operators",
        tag: "departments",
        important: false,
        summary: "Deletes a department operator by ID using the specified API endpoint and returns a status message.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("operator_id", Kind::Integer, "ID of the operator to remove."),
            Param::body("operator_type", Kind::String, "Type of the operator to remove (`user` or `room`)."),
        ],
    },
    Operation {
        name: "departments_operators_get",
        verb: Verb::Get,
        path: "/api/v2/departments/{id}/operators",
        tag: "departments",
        important: false,
        summary: "Retrieves information about operators associated with a specific department by department ID using the GET method.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "departments_operators_post",
        verb: Verb::Post,
        path: "/api/v2/departments/{id}/operators",
        tag: "departments",
        important: false,
        summary: "Creates a new operator for the specified department and returns a successful status on completion.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("operator_id", Kind::Integer, "ID of the operator to add."),
            Param::body("operator_type", Kind::String, "Type of the operator to add."),
            Param::body("role", Kind::String, "The role of the new operator."),
        ],
    },
];
