//! Errors that carry only a message and the location that raised them.

macro_rules! message_error {
    ($(#[$meta:meta])* $name:ident, $label:literal, $example:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
        #[display("{} Error: {} at line {} in {}", $label, message, line, file)]
        pub struct $name {
            /// Error message
            pub message: String,
            /// Line number where the error occurred
            pub line: u32,
            /// File where the error occurred
            pub file: &'static str,
        }

        impl $name {
            #[doc = concat!("Create a new `", stringify!($name), "` at the caller's location.")]
            ///
            /// ```
            #[doc = concat!("use tessera_error::", stringify!($name), ";")]
            ///
            #[doc = concat!("let err = ", stringify!($name), "::new(\"", $example, "\");")]
            #[doc = concat!("assert_eq!(err.message, \"", $example, "\");")]
            /// ```
            #[track_caller]
            pub fn new(message: impl Into<String>) -> Self {
                let location = std::panic::Location::caller();
                Self {
                    message: message.into(),
                    line: location.line(),
                    file: location.file(),
                }
            }
        }
    };
}

message_error!(
    /// Site configuration could not be loaded or deserialized.
    ConfigError,
    "Configuration",
    "Missing server.bind"
);

message_error!(
    /// The HTTP listener failed to bind or serve.
    HttpError,
    "HTTP",
    "Address already in use"
);

message_error!(
    /// A JSON body or document could not be encoded or decoded.
    JsonError,
    "JSON",
    "expected value at line 1 column 1"
);
