//! Calls, callbacks, share links, transcripts and conferences.

use super::{Kind, Operation, Param, Verb};

pub(super) const OPERATIONS: &[Operation] = &[
    Operation {
        name: "call_participants_add",
        verb: Verb::Post,
        path: "/api/v2/call/{id}/participants/add",
        tag: "call",
        important: false,
        summary: "Adds participants to a call using the provided call ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("participant", Kind::String, "New member of the call to add."),
        ],
    },
    Operation {
        name: "call_get_call_info",
        verb: Verb::Get,
        path: "/api/v2/call/{id}",
        tag: "call",
        important: false,
        summary: "Retrieves details of a call resource by its unique identifier.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "call_initiate_ivr_call",
        verb: Verb::Post,
        path: "/api/v2/call/initiate_ivr_call",
        tag: "call",
        important: false,
        summary: "Initiates an outbound call to ring an IVR workflow by sending a POST request and returns a confirmation upon success[1].",
        params: &[
            Param::body("custom_data", Kind::String, "Extra data to associate with the call."),
            Param::body("outbound_caller_id", Kind::String, "The e164-formatted number shown to the call recipient (or \"blocked\")."),
            Param::body("phone_number", Kind::String, "The e164-formatted number to call."),
            Param::body("target_id", Kind::Integer, "The ID of a group that will be used to initiate the call."),
            Param::body("target_type", Kind::String, "The type of a group that will be used to initiate the call."),
        ],
    },
    Operation {
        name: "call_list",
        verb: Verb::Get,
        path: "/api/v2/call",
        tag: "call",
        important: false,
        summary: "Retrieves a list of calls using the provided query parameters for filtering by cursor, start time, end time, target ID, and target type, and returns the results.",
        params: &[
            Param::query("cursor", Kind::String, "A token or unique identifier used to fetch the next or previous page of results in a paginated response, allowing incremental traversal of the dataset."),
            Param::query("started_after", Kind::Integer, "Returns only calls that began after the specified Unix timestamp."),
            Param::query("started_before", Kind::Integer, "Optional integer parameter to filter calls that started before a specified timestamp."),
            Param::query("target_id", Kind::Integer, "Optional target ID to be used for the operation, specified as an integer value."),
            Param::query("target_type", Kind::String, "Optional query parameter specifying the type of target for the call, with valid values including \"callcenter,\" \"callrouter,\" \"channel,\" \"coachinggroup,\" \"coachingteam,\" \"department,\" \"office,\" \"room,\" \"staffgroup,\" \"unknown,\" and \"user.\""),
        ],
    },
    Operation {
        name: "call_call",
        verb: Verb::Post,
        path: "/api/v2/call",
        tag: "call",
        important: false,
        summary: "Initiates a call using a JSON payload and returns a successful response upon completion.",
        params: &[
            Param::body("custom_data", Kind::String, "Extra data to associate with the call."),
            Param::body("device_id", Kind::String, "The device's id."),
            Param::body("group_id", Kind::Integer, "The ID of a group that will be used to initiate the call."),
            Param::body("group_type", Kind::String, "The type of a group that will be used to initiate the call."),
            Param::body("is_consult", Kind::Boolean, "Enables the creation of a second call."),
            Param::body("outbound_caller_id", Kind::String, "The e164-formatted number shown to the call recipient (or \"blocked\")."),
            Param::body("phone_number", Kind::String, "The e164-formatted number to call."),
            Param::body("user_id", Kind::Integer, "The id of the user who should make the outbound call."),
        ],
    },
    Operation {
        name: "call_transfer_call",
        verb: Verb::Post,
        path: "/api/v2/call/{id}/transfer",
        tag: "call",
        important: false,
        summary: "Transfers a call identified by the provided ID using the POST method, sending the request body in JSON format.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("custom_data", Kind::String, "Extra data to associate with the call."),
            Param::body("to", Kind::String, "Destination of the call that will be transfer."),
            Param::body("transfer_state", Kind::String, "The state which the call should take when it's transferred to."),
        ],
    },
    Operation {
        name: "call_unpark",
        verb: Verb::Post,
        path: "/api/v2/call/{id}/unpark",
        tag: "call",
        important: false,
        summary: "Unparks a call with the specified ID using the POST method.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("user_id", Kind::Integer, "The id of the user who should unpark the call."),
        ],
    },
    Operation {
        name: "call_actions_hangup",
        verb: Verb::Put,
        path: "/api/v2/call/{id}/actions/hangup",
        tag: "call",
        important: false,
        summary: "Hangs up a call with the specified ID using the PUT method.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "call_put_call_labels",
        verb: Verb::Put,
        path: "/api/v2/call/{id}/labels",
        tag: "call",
        important: false,
        summary: "Updates the labels of a call with the specified ID using the provided JSON data.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("labels", Kind::Array, "The list of labels to attach to the call"),
        ],
    },
    Operation {
        name: "call_callback",
        verb: Verb::Post,
        path: "/api/v2/callback",
        tag: "callback",
        important: false,
        summary: "Registers a callback endpoint using a POST request to the \"/api/v2/callback\" path, accepting a JSON payload in the request body, and returns a successful response upon registration.",
        params: &[
            Param::body("call_center_id", Kind::Integer, "The ID of a call center that will be used to fulfill the callback."),
            Param::body("phone_number", Kind::String, "The e164-formatted number to call back"),
        ],
    },
    Operation {
        name: "call_validate_callback",
        verb: Verb::Post,
        path: "/api/v2/callback/validate",
        tag: "callback",
        important: false,
        summary: "Validates a callback using the provided JSON data and returns a success response if the validation is successful.",
        params: &[
            Param::body("call_center_id", Kind::Integer, "The ID of a call center that will be used to fulfill the callback."),
            Param::body("phone_number", Kind::String, "The e164-formatted number to call back"),
        ],
    },
    Operation {
        name: "calllabel_list",
        verb: Verb::Get,
        path: "/api/v2/calllabels",
        tag: "calllabels",
        important: false,
        summary: "Retrieves a list of call labels, optionally limited by the specified number of results.",
        params: &[
            Param::query("limit", Kind::Integer, "The maximum number of call labels to return in the response, specified as an integer to limit the result set size."),
        ],
    },
    Operation {
        name: "call_review_share_link_create",
        verb: Verb::Post,
        path: "/api/v2/callreviewsharelink",
        tag: "callreviewsharelink",
        important: false,
        summary: "Creates a shareable link for a call review, returning the generated link upon successful creation.",
        params: &[
            Param::body("call_id", Kind::Integer, "The call's id."),
            Param::body("privacy", Kind::String, "The privacy state of the recording share link, 'company' will be set as default."),
        ],
    },
    Operation {
        name: "call_review_share_link_delete",
        verb: Verb::Delete,
        path: "/api/v2/callreviewsharelink/{id}",
        tag: "callreviewsharelink",
        important: false,
        summary: "Deletes a call review share link identified by the provided ID using the DELETE method.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "call_review_share_link_get",
        verb: Verb::Get,
        path: "/api/v2/callreviewsharelink/{id}",
        tag: "callreviewsharelink",
        important: false,
        summary: "Retrieves a share link for a call review by its ID using the Dialpad API.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "call_review_share_link_update",
        verb: Verb::Put,
        path: "/api/v2/callreviewsharelink/{id}",
        tag: "callreviewsharelink",
        important: false,
        summary: "Updates a call review share link for the specified ID using the provided JSON data.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("privacy", Kind::String, "The privacy state of the recording share link"),
        ],
    },
    Operation {
        name: "conference_rooms_list",
        verb: Verb::Get,
        path: "/api/v2/conference/rooms",
        tag: "conference",
        important: false,
        summary: "Retrieves a list of conference rooms using the \"GET\" method, optionally paginating results with a query parameter cursor, secured by either an API key in the URL or a Bearer token.",
        params: &[
            Param::query("cursor", Kind::String, "Optional string parameter used for cursor pagination, indicating the position to start fetching data from in the list of conference rooms."),
        ],
    },
    Operation {
        name: "conference_meetings_list",
        verb: Verb::Get,
        path: "/api/v2/conference/meetings",
        tag: "conference",
        important: false,
        summary: "Retrieves a list of meetings for a conference, allowing optional filtering by room ID and pagination using a cursor.",
        params: &[
            Param::query("cursor", Kind::String, "A unique string identifier used for cursor-based pagination to fetch the next or previous set of meetings, allowing incremental data retrieval."),
            Param::query("room_id", Kind::String, "Specifies the unique identifier of the room to filter meetings for; if omitted, all rooms are considered."),
        ],
    },
    Operation {
        name: "recording_share_link_create",
        verb: Verb::Post,
        path: "/api/v2/recordingsharelink",
        tag: "recordingsharelink",
        important: false,
        summary: "Creates a recording share link by accepting JSON input and returns a success response upon completion.",
        params: &[
            Param::body("privacy", Kind::String, "The privacy state of the recording share link."),
            Param::body("recording_id", Kind::String, "The recording entity's ID."),
            Param::body("recording_type", Kind::String, "The type of the recording entity shared via the link."),
        ],
    },
    Operation {
        name: "recording_share_link_delete",
        verb: Verb::Delete,
        path: "/api/v2/recordingsharelink/{id}",
        tag: "recordingsharelink",
        important: false,
        summary: "Deletes the recording share link identified by the specified ID and returns a confirmation upon successful completion.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "recording_share_link_get",
        verb: Verb::Get,
        path: "/api/v2/recordingsharelink/{id}",
        tag: "recordingsharelink",
        important: false,
        summary: "Retrieves a recording share link by its ID using the GET method.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "recording_share_link_update",
        verb: Verb::Put,
        path: "/api/v2/recordingsharelink/{id}",
        tag: "recordingsharelink",
        important: false,
        summary: "Updates or replaces the recording share link resource identified by the given ID with the provided data.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("privacy", Kind::String, "The privacy state of the recording share link."),
        ],
    },
    Operation {
        name: "transcripts_get",
        verb: Verb::Get,
        path: "/api/v2/transcripts/{call_id}",
        tag: "transcripts",
        important: false,
        summary: "Retrieves a transcript for a specific call identified by the call ID using the GET method.",
        params: &[
            Param::path("call_id", Kind::String, "call_id"),
        ],
    },
    Operation {
        name: "transcripts_get_url",
        verb: Verb::Get,
        path: "/api/v2/transcripts/{call_id}/url",
        tag: "transcripts",
        important: false,
        summary: "Retrieves the URL for a transcript associated with a specific call ID using the GET method.",
        params: &[
            Param::path("call_id", Kind::String, "call_id"),
        ],
    },
];
