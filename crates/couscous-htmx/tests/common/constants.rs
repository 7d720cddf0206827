//! Shared constants for test infrastructure

// Version constants
pub const VERSION_1_9_10: &str = "1.9.10";
pub const VERSION_2_0_4: &str = "2.0.4";
pub const VERSION_MISSING: &str = "0.0.404";

// Tag constants (with 'v' prefix)
pub const TAG_V2_0_4: &str = "v2.0.4";

// Extension names
pub const EXT_SSE: &str = "sse";

// Asset bodies
pub const HTMX_BODY: &str = "(function(e,t){/* htmx */})(this,function(){return{}});";
pub const SSE_BODY: &str = "htmx.defineExtension('sse', {});";
pub const WEB_TYPES_BODY: &str =
    r#"{"$schema":"http://json.schemastore.org/web-types","name":"htmx","version":"2.0.4"}"#;
