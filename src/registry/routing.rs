//! Call routers, scheduled reports and stats.

use super::{Kind, Operation, Param, Verb};

pub(super) const OPERATIONS: &[Operation] = &[
    Operation {
        name: "callrouters_list",
        verb: Verb::Get,
        path: "/api/v2/callrouters",
        tag: "callrouters",
        important: false,
        summary: "Retrieves a list of call routers, optionally filtered by office ID and paginated using a cursor.",
        params: &[
            Param::query("cursor", Kind::String, "A string parameter used for cursor-based pagination, allowing incremental data retrieval by specifying a unique identifier or token to mark the position in the dataset."),
            Param::query("office_id", Kind::Integer, "Specifies the unique office identifier to filter call routers by office; only routers associated with the specified office will be returned in the response."),
        ],
    },
    Operation {
        name: "callrouters_create",
        verb: Verb::Post,
        path: "/api/v2/callrouters",
        tag: "callrouters",
        important: false,
        summary: "Creates a new call router configuration using the provided JSON data and returns a successful response upon completion.",
        params: &[
            Param::body("default_target_id", Kind::Integer, "The ID of the target that should be used as a fallback destination for calls if the call router is disabled or fails."),
            Param::body("default_target_type", Kind::String, "The entity type of the default target."),
            Param::body("enabled", Kind::Boolean, "If set to False, the call router will skip the routing url and instead forward calls straight to the default target."),
            Param::body("name", Kind::String, "A human-readable display name for the router."),
            Param::body("office_id", Kind::Integer, "The ID of the office to which this router belongs."),
            Param::body("routing_url", Kind::String, "The URL that should be used to drive call routing decisions."),
            Param::body("secret", Kind::String, "The call router's signature secret."),
        ],
    },
    Operation {
        name: "callrouters_delete",
        verb: Verb::Delete,
        path: "/api/v2/callrouters/{id}",
        tag: "callrouters",
        important: false,
        summary: "Deletes a call router identified by the provided ID from the system.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "callrouters_get",
        verb: Verb::Get,
        path: "/api/v2/callrouters/{id}",
        tag: "callrouters",
        important: false,
        summary: "Retrieves details for a specific call router identified by its unique ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "callrouters_update",
        verb: Verb::Patch,
        path: "/api/v2/callrouters/{id}",
        tag: "callrouters",
        important: false,
        summary: "Updates a call router with a specified ID using partial modifications via a JSON Patch document.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("default_target_id", Kind::Integer, "The ID of the target that should be used as a fallback destination for calls if the call router is disabled or fails."),
            Param::body("default_target_type", Kind::String, "The entity type of the default target."),
            Param::body("enabled", Kind::Boolean, "If set to False, the call router will skip the routing url and instead forward calls straight to the default target."),
            Param::body("name", Kind::String, "A human-readable display name for the router."),
            Param::body("office_id", Kind::Integer, "The ID of the office to which this router belongs."),
            Param::body("reset_error_count", Kind::Boolean, "Sets the auto-disablement routing error count back to zero."),
            Param::body("routing_url", Kind::String, "The URL that should be used to drive call routing decisions."),
            Param::body("secret", Kind::String, "The call router's signature secret."),
        ],
    },
    Operation {
        name: "numbers_assign_call_router_number_post",
        verb: Verb::Post,
        path: "/api/v2/callrouters/{id}/assign_number",
        tag: "callrouters",
        important: false,
        summary: "Assigns a phone number to a call router with the specified ID using the provided JSON data.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("area_code", Kind::String, "An area code in which to find an available phone number for assignment."),
            Param::body("number", Kind::String, "A phone number to assign."),
            Param::body("primary", Kind::Boolean, "A boolean indicating whether this should become the primary phone number."),
        ],
    },
    Operation {
        name: "schedule_reports_delete",
        verb: Verb::Delete,
        path: "/api/v2/schedulereports/{id}",
        tag: "schedulereports",
        important: false,
        summary: "Deletes a schedule report by ID using the DELETE method, returning a successful response if the operation is completed.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "schedule_reports_get",
        verb: Verb::Get,
        path: "/api/v2/schedulereports/{id}",
        tag: "schedulereports",
        important: false,
        summary: "Retrieves a scheduled report by its ID using the \"GET\" method, returning details or results of the specified report.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "schedule_reports_update",
        verb: Verb::Patch,
        path: "/api/v2/schedulereports/{id}",
        tag: "schedulereports",
        important: false,
        summary: "Updates a scheduled report by modifying specific properties of the resource identified by the provided ID using a JSON payload.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("at", Kind::Integer, "Hour of the day when the report will execute considering the frequency and timezones between 0 and 23 e.g."),
            Param::body("coaching_group", Kind::Boolean, "Whether the the statistics should be for trainees of the coach group with the given target_id."),
            Param::body("enabled", Kind::Boolean, "Whether or not this schedule reports event subscription is enabled."),
            Param::body("endpoint_id", Kind::Integer, "The logging endpoint's ID, which is generated after creating a webhook or websocket successfully."),
            Param::body("frequency", Kind::String, "How often the report will execute."),
            Param::body("name", Kind::String, "The name of the schedule reports."),
            Param::body("on_day", Kind::Integer, "The day of the week or month when the report will execute considering the frequency."),
            Param::body("report_type", Kind::String, "The type of report that will be generated."),
            Param::body("target_id", Kind::Integer, "The target's id."),
            Param::body("target_type", Kind::String, "Target's type."),
            Param::body("timezone", Kind::String, "Timezone using a tz database name."),
        ],
    },
    Operation {
        name: "schedule_reports_list",
        verb: Verb::Get,
        path: "/api/v2/schedulereports",
        tag: "schedulereports",
        important: false,
        summary: "Retrieves a list of scheduled reports, optionally paginated by a cursor, and returns them in response.",
        params: &[
            Param::query("cursor", Kind::String, "An opaque string used for cursor-based pagination to retrieve the next page of data, typically based on a unique identifier or timestamp."),
        ],
    },
    Operation {
        name: "schedule_reports_create",
        verb: Verb::Post,
        path: "/api/v2/schedulereports",
        tag: "schedulereports",
        important: false,
        summary: "Schedules reports for retrieval using the POST method, sending a JSON request to configure the reporting parameters.",
        params: &[
            Param::body("at", Kind::Integer, "Hour of the day when the report will execute considering the frequency and timezones between 0 and 23 e.g."),
            Param::body("coaching_group", Kind::Boolean, "Whether the the statistics should be for trainees of the coach group with the given target_id."),
            Param::body("enabled", Kind::Boolean, "Whether or not this schedule reports event subscription is enabled."),
            Param::body("endpoint_id", Kind::Integer, "The logging endpoint's ID, which is generated after creating a webhook or websocket successfully."),
            Param::body("frequency", Kind::String, "How often the report will execute."),
            Param::body("name", Kind::String, "The name of the schedule reports."),
            Param::body("on_day", Kind::Integer, "The day of the week or month when the report will execute considering the frequency."),
            Param::body("report_type", Kind::String, "The type of report that will be generated."),
            Param::body("target_id", Kind::Integer, "The target's id."),
            Param::body("target_type", Kind::String, "Target's type."),
            Param::body("timezone", Kind::String, "Timezone using a tz database name."),
        ],
    },
    Operation {
        name: "stats_get",
        verb: Verb::Get,
        path: "/api/v2/stats/{id}",
        tag: "stats",
        important: false,
        summary: "Retrieves statistics for the specified resource identified by the provided ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "stats_create",
        verb: Verb::Post,
        path: "/api/v2/stats",
        tag: "stats",
        important: false,
        summary: "Submits statistical data via a POST request to the \"/api/v2/stats\" endpoint and expects a successful (200) response upon completion.",
        params: &[
            Param::body("coaching_group", Kind::Boolean, "Whether or not the the statistics should be for trainees of the coach group with the given target_id."),
            Param::body("coaching_team", Kind::Boolean, "Whether or not the the statistics should be for trainees of the coach team with the given target_id."),
            Param::body("days_ago_end", Kind::Integer, "End of the date range to get statistics for."),
            Param::body("days_ago_start", Kind::Integer, "Start of the date range to get statistics for."),
            Param::body("export_type", Kind::String, "Whether to return aggregated statistics (stats), or individual rows for each record (records)."),
            Param::body("group_by", Kind::String, "This param is only applicable when the stat_type is specified as call."),
            Param::body("is_today", Kind::Boolean, "Whether or not the statistics are for the current day."),
            Param::body("office_id", Kind::Integer, "ID of the office to get statistics for."),
            Param::body("stat_type", Kind::String, "The type of statistics to be returned."),
            Param::body("target_id", Kind::Integer, "The target's id."),
            Param::body("target_type", Kind::String, "Target's type."),
            Param::body("timezone", Kind::String, "Timezone using a tz database name."),
        ],
    },
];
