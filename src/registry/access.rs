//! Access control policies, app settings, company and OAuth endpoints.

use super::{Kind, Operation, Param, Verb};

pub(super) const OPERATIONS: &[Operation] = &[
    Operation {
        name: "accesscontrolpolicies_assign",
        verb: Verb::Post,
        path: "/api/v2/accesscontrolpolicies/{id}/assign",
        tag: "accesscontrolpolicies",
        important: false,
        summary: "Assigns an access control policy to a target entity using the provided policy ID and returns a success status.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("target_id", Kind::Integer, "Required if the policy is associated with a target (Office or Contact Center)."),
            Param::body("target_type", Kind::String, "Policy permissions applied at this target level."),
            Param::body("user_id", Kind::Integer, "The user's id to be assigned to the policy."),
        ],
    },
    Operation {
        name: "accesscontrolpolicies_list",
        verb: Verb::Get,
        path: "/api/v2/accesscontrolpolicies",
        tag: "accesscontrolpolicies",
        important: false,
        summary: "Retrieves a list of access control policies using the \"GET\" method, optionally paginating results with a cursor parameter.",
        params: &[
            Param::query("cursor", Kind::String, "A token that marks the current position in the paginated list, used to fetch the next page of access control policies."),
        ],
    },
    Operation {
        name: "accesscontrolpolicies_create",
        verb: Verb::Post,
        path: "/api/v2/accesscontrolpolicies",
        tag: "accesscontrolpolicies",
        important: false,
        summary: "Creates a new access control policy using JSON data and returns a successful response upon completion.",
        params: &[
            Param::body("description", Kind::String, "Optional description for the policy."),
            Param::body("name", Kind::String, "A human-readable display name for the policy."),
            Param::body("owner_id", Kind::Integer, "Owner for this policy i.e company admin."),
            Param::body("permission_sets", Kind::Array, "List of permission associated with this policy."),
            Param::body("target_type", Kind::String, "Policy permissions applied at this target level."),
        ],
    },
    Operation {
        name: "accesscontrolpolicies_delete",
        verb: Verb::Delete,
        path: "/api/v2/accesscontrolpolicies/{id}",
        tag: "accesscontrolpolicies",
        important: false,
        summary: "Deletes the specified access control policy identified by the provided ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "accesscontrolpolicies_get",
        verb: Verb::Get,
        path: "/api/v2/accesscontrolpolicies/{id}",
        tag: "accesscontrolpolicies",
        important: false,
        summary: "Retrieves a specific access control policy by its ID using the GET method.",
        params: &[
            Param::path("id", Kind::String, "id"),
        ],
    },
    Operation {
        name: "accesscontrolpolicies_update",
        verb: Verb::Patch,
        path: "/api/v2/accesscontrolpolicies/{id}",
        tag: "accesscontrolpolicies",
        important: false,
        summary: "Partially updates an existing access control policy by its ID using a JSON payload.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("description", Kind::String, "Optional description for the policy."),
            Param::body("name", Kind::String, "A human-readable display name for the policy."),
            Param::body("permission_sets", Kind::Array, "List of permission associated with this policy."),
            Param::body("state", Kind::String, "Restore a deleted policy."),
            Param::body("user_id", Kind::Integer, "user id updating this policy."),
        ],
    },
    Operation {
        name: "accesscontrolpolicies_assignments",
        verb: Verb::Get,
        path: "/api/v2/accesscontrolpolicies/{id}/assignments",
        tag: "accesscontrolpolicies",
        important: false,
        summary: "Retrieves the assignments of an access control policy identified by the specified ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::query("cursor", Kind::String, "A string token used to fetch the next page of results in cursor-based pagination, enabling efficient retrieval of large or changing datasets by marking the position in the result set."),
        ],
    },
    Operation {
        name: "accesscontrolpolicies_unassign",
        verb: Verb::Post,
        path: "/api/v2/accesscontrolpolicies/{id}/unassign",
        tag: "accesscontrolpolicies",
        important: false,
        summary: "Unassigns an access control policy from a specified ID using a POST request, allowing for the removal of policy assignments based on the provided ID.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::body("target_id", Kind::Integer, "Required if the policy is associated with a target (Office or Contact Center)."),
            Param::body("target_type", Kind::String, "Policy permissions applied at this target level."),
            Param::body("unassign_all", Kind::Boolean, "Unassign all associated target groups from the user for a policy."),
            Param::body("user_id", Kind::Integer, "The user's id to be assigned to the policy."),
        ],
    },
    Operation {
        name: "app_settings_get",
        verb: Verb::Get,
        path: "/api/v2/app/settings",
        tag: "app",
        important: false,
        summary: "Retrieves application settings using the provided target ID and type from version 2 of the API.",
        params: &[
            Param::query("target_id", Kind::Integer, "Optional integer query parameter to specify the target ID for filtering or retrieving specific app settings."),
            Param::query("target_type", Kind::String, "Optional query parameter to specify the type of target entity, with allowed values including callcenter, callrouter, channel, coachinggroup, coachingteam, department, office, room, staffgroup, unknown, or user."),
        ],
    },
    Operation {
        name: "company_get",
        verb: Verb::Get,
        path: "/api/v2/company",
        tag: "company",
        important: false,
        summary: "Retrieves company data using the \"GET\" method at the \"/api/v2/company\" endpoint and returns the response.",
        params: &[],
    },
    Operation {
        name: "company_sms_opt_out",
        verb: Verb::Get,
        path: "/api/v2/company/{id}/smsoptout",
        tag: "company",
        important: false,
        summary: "Retrieves a list of SMS opt-out information for a specified company, filtered by optional parameters such as a2p campaign ID and cursor, with a required opt-out state parameter.",
        params: &[
            Param::path("id", Kind::String, "id"),
            Param::required_query("opt_out_state", Kind::String, "The \"opt_out_state\" parameter specifies the opt-out status of SMS messages, required for filtering results, with possible values being \"opted_out\" or \"opted_back_in\"."),
            Param::query("a2p_campaign_id", Kind::Integer, "Optional integer parameter to filter SMS opt-out records by a specific A2P campaign ID."),
            Param::query("cursor", Kind::String, "An opaque string used for cursor-based pagination, indicating the position in the dataset from which to retrieve the next page of SMS opt-out records."),
        ],
    },
    Operation {
        name: "oauth2_authorize_get",
        verb: Verb::Get,
        path: "/oauth2/authorize",
        tag: "oauth2",
        important: false,
        summary: "Initiates the OAuth 2.0 authorization code flow by redirecting the user to authenticate and grant permissions, then redirects back to the specified callback URL with an authorization code or error.",
        params: &[
            Param::required_query("redirect_uri", Kind::String, "The URL to which the authorization server will redirect the user after authentication; must exactly match one of the registered redirect URIs for the client."),
            Param::required_query("client_id", Kind::String, "The `client_id` parameter is a required string that identifies the client application making the authorization request to the OAuth 2.0 authorization server."),
            Param::query("code_challenge_method", Kind::String, "The \"code_challenge_method\" parameter specifies the method used to derive the code challenge, with supported values being \"S256\" for SHA-256 hashing and \"plain\" for no hashing."),
            Param::query("code_challenge", Kind::String, "The `code_challenge` parameter is a base64url-encoded string used in the Proof Key for Code Exchange (PKCE) flow to ensure secure authorization code exchange, sent in the authorization request to prevent authorization code interception attacks."),
            Param::query("scope", Kind::String, "Specifies the permissions (as a space-separated list of OAuth 2.0 scopes) that the client requests from the user during authorization; each scope defines a level of access to protected resources[2][5][3]."),
            Param::query("response_type", Kind::String, "Specifies the type of response expected from the authorization server, with the value \"code\" indicating an authorization code grant is expected."),
            Param::query("state", Kind::String, "An opaque value used by the client to maintain state between the request and callback, helping to prevent cross-site request forgery and allowing restoration of the application state after authentication."),
        ],
    },
    Operation {
        name: "oauth2_deauthorize_post",
        verb: Verb::Post,
        path: "/oauth2/deauthorize",
        tag: "oauth2",
        important: false,
        summary: "Revokes OAuth 2.0 access tokens associated with the client or user, returning a successful response with no content.",
        params: &[],
    },
];
