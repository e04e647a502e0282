//! Phone numbers, blocked numbers, fax lines and SMS.

use super::{Kind, Operation, Param, Verb};

pub(super) const OPERATIONS: &[Operation] = &[
    Operation {
        name: "blockednumbers_add",
        verb: Verb::Post,
        path: "/api/v2/blockednumbers/add",
        tag: "blockednumbers",
        important: false,
        summary: "Adds a phone number to the blocked numbers list using a JSON-formatted request body and returns a success status.",
        params: &[
            Param::body("numbers", Kind::Array, "A list of E164 formatted numbers."),
        ],
    },
    Operation {
        name: "blockednumbers_get",
        verb: Verb::Get,
        path: "/api/v2/blockednumbers/{number}",
        tag: "blockednumbers",
        important: false,
        summary: "Retrieves information about a specific blocked number identified by the given number parameter.",
        params: &[
            Param::path("number", Kind::String, "number"),
        ],
    },
    Operation {
        name: "blockednumbers_remove",
        verb: Verb::Post,
        path: "/api/v2/blockednumbers/remove",
        tag: "blockednumbers",
        important: false,
        summary: "Removes a blocked number using the POST method, sending data in JSON format to the defined API endpoint and returns a status response.",
        params: &[
            Param::body("numbers", Kind::Array, "A list of E164 formatted numbers."),
        ],
    },
    Operation {
        name: "blockednumbers_list",
        verb: Verb::Get,
        path: "/api/v2/blockednumbers",
        tag: "blockednumbers",
        important: false,
        summary: "Retrieves a list of blocked numbers using the provided cursor for pagination.",
        params: &[
            Param::query("cursor", Kind::String, "A string token used to fetch the next or previous page of results in cursor-based pagination, allowing for stable pagination through large datasets."),
        ],
    },
    Operation {
        name: "faxline_create",
        verb: Verb::Post,
        path: "/api/v2/faxline",
        tag: "faxline",
        important: false,
        summary: "Creates a new fax line resource using the provided JSON data and returns a successful response upon creation.",
        params: &[
            Param::body("line", Kind::String, "Line to assign."),
            Param::body("target", Kind::Object, "target"),
        ],
    },
    Operation {
        name: "numbers_assign_number_post",
        verb: Verb::Post,
        path: "/api/v2/numbers/{number}/assign",
        tag: "numbers",
        important: false,
        summary: "Assigns a specified number to a resource by sending a POST request with the number as a path parameter and the assignment details in the request body.",
        params: &[
            Param::path("number", Kind::String, "number"),
            Param::body("primary", Kind::Boolean, "A boolean indicating whether this should become the target's primary phone number."),
            Param::body("target_id", Kind::Integer, "The ID of the target to reassign this number to."),
            Param::body("target_type", Kind::String, "The type of the target."),
        ],
    },
    Operation {
        name: "numbers_assign_target_number_post",
        verb: Verb::Post,
        path: "/api/v2/numbers/assign",
        tag: "numbers",
        important: false,
        summary: "Assigns numbers using a JSON payload in the request body via the \"POST\" method and returns a successful response upon completion.",
        params: &[
            Param::body("area_code", Kind::String, "An area code in which to find an available phone number for assignment."),
            Param::body("number", Kind::String, "A phone number to assign."),
            Param::body("primary", Kind::Boolean, "A boolean indicating whether this should become the target's primary phone number."),
            Param::body("target_id", Kind::Integer, "The ID of the target to reassign this number to."),
            Param::body("target_type", Kind::String, "The type of the target."),
        ],
    },
    Operation {
        name: "numbers_delete",
        verb: Verb::Delete,
        path: "/api/v2/numbers/{number}",
        tag: "numbers",
        important: false,
        summary: "Deletes a number resource identified by the path parameter \"number\" and optionally considers the \"release\" status if specified in the query.",
        params: &[
            Param::path("number", Kind::String, "number"),
            Param::query("release", Kind::Boolean, "Optional boolean parameter indicating whether to release resources associated with the number during deletion."),
        ],
    },
    Operation {
        name: "numbers_get",
        verb: Verb::Get,
        path: "/api/v2/numbers/{number}",
        tag: "numbers",
        important: false,
        summary: "Retrieves information for a specific number using the provided number identifier.",
        params: &[
            Param::path("number", Kind::String, "number"),
        ],
    },
    Operation {
        name: "numbers_list",
        verb: Verb::Get,
        path: "/api/v2/numbers",
        tag: "numbers",
        important: false,
        summary: "Retrieves a list of numbers with optional filtering by status and supports pagination using a cursor parameter.",
        params: &[
            Param::query("cursor", Kind::String, "An opaque string token used for cursor-based pagination, allowing clients to retrieve the next page of data by including this value in the request."),
            Param::query("status", Kind::String, "Optional query parameter to filter results by the status of the numbers."),
        ],
    },
    Operation {
        name: "format_post",
        verb: Verb::Post,
        path: "/api/v2/numbers/format",
        tag: "numbers",
        important: false,
        summary: "Formats a given number according to the specified country code and returns the formatted result.",
        params: &[
            Param::query("country_code", Kind::String, "Optional country code as a string to specify the country for number formatting."),
            Param::query("number", Kind::String, "An optional string parameter used to specify a number for formatting purposes in the request."),
        ],
    },
    Operation {
        name: "sms_send",
        verb: Verb::Post,
        path: "/api/v2/sms",
        tag: "sms",
        important: false,
        summary: "Sends an SMS message using the provided JSON data in the request body and returns a status message upon successful execution.",
        params: &[
            Param::body("channel_hashtag", Kind::String, "The hashtag of the channel which should receive the SMS."),
            Param::body("from_number", Kind::String, "The number of who sending the SMS."),
            Param::body("infer_country_code", Kind::Boolean, "If true, to_numbers will be assumed to be from the specified user's country, and the E164 format requirement will be relaxed."),
            Param::body("media", Kind::String, "Base64-encoded media attachment (will cause the message to be sent as MMS)."),
            Param::body("sender_group_id", Kind::Integer, "The ID of an office, department, or call center that the User should send the message on behalf of."),
            Param::body("sender_group_type", Kind::String, "The sender group's type (i.e."),
            Param::body("text", Kind::String, "The contents of the message that should be sent."),
            Param::body("to_numbers", Kind::Array, "Up to 10 E164-formatted phone numbers who should receive the SMS."),
            Param::body("user_id", Kind::Integer, "The ID of the user who should be the sender of the SMS."),
        ],
    },
];
