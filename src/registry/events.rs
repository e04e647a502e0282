//! Event subscriptions, webhooks and websockets.

use super::{Kind, Operation, Param, Verb};

pub(super) const OPERATIONS: &[Operation] = &[
    Operation {
        name: "webhook_agent_status_event_subscription_list",
        verb: Verb::Get,
        path: "/api/v2/subscriptions/agent_status",
        tag: "subscriptions",
        important: false,
        summary: "Retrieves the current status of agent subscriptions, optionally paginated using a cursor parameter.",
        params: &[
            Param::query("cursor", Kind::String, "A unique identifier used in cursor-based pagination to fetch data incrementally, specifying the position from which to retrieve the next set of results."),
        ],
    },
    Operation {
        name: "webhook_agent_status_event_subscription_create",
        verb: Verb::Post,
        path: "/api/v2/subscriptions/agent_status",
        tag: "subscriptions",
        important: false,
        summary: "Updates the agent status for a subscription using JSON data and returns a successful response.",
        params: &[
            Param::body("agent_type", Kind::String, "The agent type this event subscription subscribes to."),
            Param::body("enabled", Kind::Boolean, "Whether or not the this agent status event subscription is enabled."),
            Param::body("endpoint_id", Kind::Integer, "The logging endpoint's ID, which is generated after creating a webhook or websocket successfully."),
        ],
    },
    Operation {
        name: "webhook_agent_status_event_subscription_delete",
        verb: Verb::Delete,
        path: "/api/v2/subscriptions/agent_status/{id}",
        tag: "subscriptions",
        important: false,
        summary: "Deletes an agent status event subscription by its unique identifier.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "webhook_agent_status_event_subscription_get",
        verb: Verb::Get,
        path: "/api/v2/subscriptions/agent_status/{id}",
        tag: "subscriptions",
        important: false,
        summary: "Retrieves the status information of a subscription agent identified by the given ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "webhook_agent_status_event_subscription_update",
        verb: Verb::Patch,
        path: "/api/v2/subscriptions/agent_status/{id}",
        tag: "subscriptions",
        important: false,
        summary: "Updates the status of a specific agent subscription using a JSON payload.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("agent_type", Kind::String, "The agent type this event subscription subscribes to."),
            Param::body("enabled", Kind::Boolean, "Whether or not the this agent status event subscription is enabled."),
            Param::body("endpoint_id", Kind::Integer, "The logging endpoint's ID, which is generated after creating a webhook or websocket successfully."),
        ],
    },
    Operation {
        name: "webhook_call_event_subscription_list",
        verb: Verb::Get,
        path: "/api/v2/subscriptions/call",
        tag: "subscriptions",
        important: false,
        summary: "Retrieves information about a call subscription using optional parameters for cursor, target type, and target ID.",
        params: &[
            Param::query("cursor", Kind::String, "An opaque string used for cursor-based pagination, indicating the position in the dataset to fetch the next page of subscriptions."),
            Param::query("target_type", Kind::String, "**target_type**: Optional string parameter to specify the type of subscription target, such as callcenter, callrouter, channel, coachinggroup, coachingteam, department, office, room, staffgroup, user, or unknown."),
            Param::query("target_id", Kind::Integer, "An optional integer parameter that specifies the target ID for filtering subscriptions during the call operation."),
        ],
    },
    Operation {
        name: "webhook_call_event_subscription_create",
        verb: Verb::Post,
        path: "/api/v2/subscriptions/call",
        tag: "subscriptions",
        important: false,
        summary: "Subscribes a user to a call notification service using a JSON payload and returns a success response upon successful subscription.",
        params: &[
            Param::body("call_states", Kind::Array, "The call event subscription's list of call states."),
            Param::body("enabled", Kind::Boolean, "Whether or not the call event subscription is enabled."),
            Param::body("endpoint_id", Kind::Integer, "The logging endpoint's ID, which is generated after creating a webhook or websocket successfully."),
            Param::body("group_calls_only", Kind::Boolean, "Call event subscription for group calls only."),
            Param::body("target_id", Kind::Integer, "The ID of the specific target for which events should be sent."),
            Param::body("target_type", Kind::String, "The target type."),
        ],
    },
    Operation {
        name: "webhook_call_event_subscription_delete",
        verb: Verb::Delete,
        path: "/api/v2/subscriptions/call/{id}",
        tag: "subscriptions",
        important: false,
        summary: "Cancels a subscription identified by the provided ID using the DELETE method, preventing future charges and updating the subscription status to canceled.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "webhook_call_event_subscription_get",
        verb: Verb::Get,
        path: "/api/v2/subscriptions/call/{id}",
        tag: "subscriptions",
        important: false,
        summary: "Retrieves the subscription details identified by the specified subscription ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "webhook_call_event_subscription_update",
        verb: Verb::Patch,
        path: "/api/v2/subscriptions/call/{id}",
        tag: "subscriptions",
        important: false,
        summary: "Partially updates a subscription identified by the provided ID using the PATCH method, allowing for selective modification of specific fields in the subscription resource.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("call_states", Kind::Array, "The call event subscription's list of call states."),
            Param::body("enabled", Kind::Boolean, "Whether or not the call event subscription is enabled."),
            Param::body("endpoint_id", Kind::Integer, "The logging endpoint's ID, which is generated after creating a webhook or websocket successfully."),
            Param::body("group_calls_only", Kind::Boolean, "Call event subscription for group calls only."),
            Param::body("target_id", Kind::Integer, "The ID of the specific target for which events should be sent."),
            Param::body("target_type", Kind::String, "The target type."),
        ],
    },
    Operation {
        name: "webhook_change_log_event_subscription_list",
        verb: Verb::Get,
        path: "/api/v2/subscriptions/changelog",
        tag: "subscriptions",
        important: false,
        summary: "Retrieves a changelog of subscription updates using the \"GET\" method, optionally filtering results by a specified cursor, and authenticates via either an API key or Bearer token.",
        params: &[
            Param::query("cursor", Kind::String, "Used for cursor-based pagination, this string parameter specifies a unique identifier to fetch the next page of changelog data."),
        ],
    },
    Operation {
        name: "webhook_change_log_event_subscription_create",
        verb: Verb::Post,
        path: "/api/v2/subscriptions/changelog",
        tag: "subscriptions",
        important: false,
        summary: "Submits a subscription changelog entry by posting JSON data and returns a 200 response if successful, with authentication handled via API key or bearer token.",
        params: &[
            Param::body("enabled", Kind::Boolean, "Whether or not the this change log event subscription is enabled."),
            Param::body("endpoint_id", Kind::Integer, "The logging endpoint's ID, which is generated after creating a webhook or websocket successfully."),
        ],
    },
    Operation {
        name: "webhook_change_log_event_subscription_delete",
        verb: Verb::Delete,
        path: "/api/v2/subscriptions/changelog/{id}",
        tag: "subscriptions",
        important: false,
        summary: "Deletes a specific changelog entry identified by the provided ID using the \"DELETE\" method.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "webhook_change_log_event_subscription_get",
        verb: Verb::Get,
        path: "/api/v2/subscriptions/changelog/{id}",
        tag: "subscriptions",
        important: false,
        summary: "Retrieves the changelog for a specific subscription with the given ID using a GET request, requiring either an API key in the URL or a Bearer token for authentication.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "webhook_change_log_event_subscription_update",
        verb: Verb::Patch,
        path: "/api/v2/subscriptions/changelog/{id}",
        tag: "subscriptions",
        important: false,
        summary: "Updates a specific changelog subscription by modifying its properties using a JSON patch document, and returns a status message indicating the success of the operation.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("enabled", Kind::Boolean, "Whether or not the change log event subscription is enabled."),
            Param::body("endpoint_id", Kind::Integer, "The logging endpoint's ID, which is generated after creating a webhook or websocket successfully."),
        ],
    },
    Operation {
        name: "webhook_contact_event_subscription_list",
        verb: Verb::Get,
        path: "/api/v2/subscriptions/contact",
        tag: "subscriptions",
        important: false,
        summary: "Retrieves a list of contact details for subscriptions, allowing pagination via a cursor parameter.",
        params: &[
            Param::query("cursor", Kind::String, "An opaque token used for cursor-based pagination to retrieve the next page of results, typically set to a unique identifier like a timestamp or record ID."),
        ],
    },
    Operation {
        name: "webhook_contact_event_subscription_create",
        verb: Verb::Post,
        path: "/api/v2/subscriptions/contact",
        tag: "subscriptions",
        important: false,
        summary: "Creates a new contact subscription using the provided JSON data and returns a successful response.",
        params: &[
            Param::body("contact_type", Kind::String, "The contact type this event subscription subscribes to."),
            Param::body("enabled", Kind::Boolean, "Whether or not the contact event subscription is enabled."),
            Param::body("endpoint_id", Kind::Integer, "The logging endpoint's ID, which is generated after creating a webhook or websocket successfully."),
        ],
    },
    Operation {
        name: "webhook_contact_event_subscription_delete",
        verb: Verb::Delete,
        path: "/api/v2/subscriptions/contact/{id}",
        tag: "subscriptions",
        important: false,
        summary: "Deletes a subscription associated with a specific contact ID, removing the subscription from the system and preventing future charges.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "webhook_contact_event_subscription_get",
        verb: Verb::Get,
        path: "/api/v2/subscriptions/contact/{id}",
        tag: "subscriptions",
        important: false,
        summary: "Retrieves a subscription associated with a specific contact by their ID using the GET method.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "webhook_contact_event_subscription_update",
        verb: Verb::Patch,
        path: "/api/v2/subscriptions/contact/{id}",
        tag: "subscriptions",
        important: false,
        summary: "Modifies a specific subscription contact by ID using a JSON patch document to update its properties.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("contact_type", Kind::String, "The contact type this event subscription subscribes to."),
            Param::body("enabled", Kind::Boolean, "Whether or not the contact event subscription is enabled."),
            Param::body("endpoint_id", Kind::Integer, "The logging endpoint's ID, which is generated after creating a webhook or websocket successfully."),
        ],
    },
    Operation {
        name: "webhook_sms_event_subscription_list",
        verb: Verb::Get,
        path: "/api/v2/subscriptions/sms",
        tag: "subscriptions",
        important: false,
        summary: "Retrieves a list of SMS subscriptions, optionally filtered by cursor, target type, and target ID.",
        params: &[
            Param::query("cursor", Kind::String, "An opaque token used for cursor-based pagination, specifying the position from which to fetch the next set of results in a paginated list of SMS subscriptions."),
            Param::query("target_type", Kind::String, "Optional string parameter to specify the target type for subscriptions, with allowed values being callcenter, callrouter, channel, coachinggroup, coachingteam, department, office, room, staffgroup, unknown, or user."),
            Param::query("target_id", Kind::Integer, "Optional integer parameter specifying the target ID for filtering or identifying specific subscriptions in the SMS-related query."),
        ],
    },
    Operation {
        name: "webhook_sms_event_subscription_create",
        verb: Verb::Post,
        path: "/api/v2/subscriptions/sms",
        tag: "subscriptions",
        important: false,
        summary: "Sends a subscription request for SMS notifications by creating an SMS subscription.",
        params: &[
            Param::body("direction", Kind::String, "The SMS direction this event subscription subscribes to."),
            Param::body("enabled", Kind::Boolean, "Whether or not the SMS event subscription is enabled."),
            Param::body("endpoint_id", Kind::Integer, "The logging endpoint's ID, which is generated after creating a webhook or websocket successfully."),
            Param::body("include_internal", Kind::Boolean, "Whether or not to trigger SMS events for SMS sent between two users from the same company."),
            Param::body("status", Kind::Boolean, "Whether or not to update on each SMS delivery status."),
            Param::body("target_id", Kind::Integer, "The ID of the specific target for which events should be sent."),
            Param::body("target_type", Kind::String, "The target's type."),
        ],
    },
    Operation {
        name: "webhook_sms_event_subscription_delete",
        verb: Verb::Delete,
        path: "/api/v2/subscriptions/sms/{id}",
        tag: "subscriptions",
        important: false,
        summary: "Cancels an SMS subscription by its ID using the DELETE method, removing future charges and updating the subscription status to reflect cancellation.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "webhook_sms_event_subscription_get",
        verb: Verb::Get,
        path: "/api/v2/subscriptions/sms/{id}",
        tag: "subscriptions",
        important: false,
        summary: "Retrieves the details of a specific SMS subscription identified by the provided subscription ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "webhook_sms_event_subscription_update",
        verb: Verb::Patch,
        path: "/api/v2/subscriptions/sms/{id}",
        tag: "subscriptions",
        important: false,
        summary: "Updates an SMS subscription identified by its ID, modifying specific properties using JSON Patch operations.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("direction", Kind::String, "The SMS direction this event subscription subscribes to."),
            Param::body("enabled", Kind::Boolean, "Whether or not the SMS event subscription is enabled."),
            Param::body("endpoint_id", Kind::Integer, "The logging endpoint's ID, which is generated after creating a webhook or websocket successfully."),
            Param::body("include_internal", Kind::Boolean, "Whether or not to trigger SMS events for SMS sent between two users from the same company."),
            Param::body("status", Kind::Boolean, "Whether or not to update on each SMS delivery status."),
            Param::body("target_id", Kind::Integer, "The ID of the specific target for which events should be sent."),
            Param::body("target_type", Kind::String, "The target's type."),
        ],
    },
    Operation {
        name: "webhooks_list",
        verb: Verb::Get,
        path: "/api/v2/webhooks",
        tag: "webhooks",
        important: false,
        summary: "Retrieves a list of webhooks, optionally supporting pagination with a cursor query parameter.",
        params: &[
            Param::query("cursor", Kind::String, "A string value representing a cursor used to fetch the next page of webhook records in a paginated response."),
        ],
    },
    Operation {
        name: "webhooks_create",
        verb: Verb::Post,
        path: "/api/v2/webhooks",
        tag: "webhooks",
        important: false,
        summary: "Creates a new webhook endpoint that sends HTTP notifications in response to specified events.",
        params: &[
            Param::body("hook_url", Kind::String, "The webhook's URL."),
            Param::body("secret", Kind::String, "Webhook's signature secret that's used to confirm the validity of the request."),
        ],
    },
    Operation {
        name: "webhooks_delete",
        verb: Verb::Delete,
        path: "/api/v2/webhooks/{id}",
        tag: "webhooks",
        important: false,
        summary: "Deletes the webhook with the specified ID and returns a success status.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "webhooks_get",
        verb: Verb::Get,
        path: "/api/v2/webhooks/{id}",
        tag: "webhooks",
        important: false,
        summary: "Retrieves details of a webhook by its ID using the \"GET\" method.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "webhook_update",
        verb: Verb::Patch,
        path: "/api/v2/webhooks/{id}",
        tag: "webhooks",
        important: false,
        summary: "Updates a specific webhook resource by its ID using a partial payload sent via PATCH.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("hook_url", Kind::String, "The webhook's URL."),
            Param::body("secret", Kind::String, "Webhook's signature secret that's used to confirm the validity of the request."),
        ],
    },
    Operation {
        name: "websockets_list",
        verb: Verb::Get,
        path: "/api/v2/websockets",
        tag: "websockets",
        important: false,
        summary: "Establishes a WebSocket connection at \"/api/v2/websockets\" using the GET method, allowing optional specification of a cursor for resuming data consumption.",
        params: &[
            Param::query("cursor", Kind::String, "An opaque token used for cursor-based pagination, allowing retrieval of data in a specific order by marking the position in the dataset."),
        ],
    },
    Operation {
        name: "websockets_create",
        verb: Verb::Post,
        path: "/api/v2/websockets",
        tag: "websockets",
        important: false,
        summary: "Establishes a WebSocket connection using the POST method to the \"/api/v2/websockets\" endpoint, accepting JSON data in the request body.",
        params: &[
            Param::body("secret", Kind::String, "Websocket's signature secret that's used to confirm the validity of the request."),
        ],
    },
    Operation {
        name: "websockets_delete",
        verb: Verb::Delete,
        path: "/api/v2/websockets/{id}",
        tag: "websockets",
        important: false,
        summary: "Deletes a WebSocket by its ID, specified in the path, using the \"DELETE\" method.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "websockets_get",
        verb: Verb::Get,
        path: "/api/v2/websockets/{id}",
        tag: "websockets",
        important: false,
        summary: "Retrieves details for a specific WebSocket connection identified by its integer ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "websockets_update",
        verb: Verb::Patch,
        path: "/api/v2/websockets/{id}",
        tag: "websockets",
        important: false,
        summary: "Updates the WebSocket connection resource identified by the specified ID using a JSON-formatted patch request.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("secret", Kind::String, "Websocket's signature secret that's used to confirm the validity of the request."),
        ],
    },
];
