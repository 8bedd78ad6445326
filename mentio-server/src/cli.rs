use clap::{Arg, ArgAction, Command, ValueHint};

/// CLI arguments for mentio-server
#[derive(Debug, Clone)]
pub struct CliArgs {
    pub port: Option<u16>,
    pub route_prefix: Option<String>,
    pub max_request_size: Option<usize>,
    pub max_batch_size: Option<usize>,
    pub max_concurrency: Option<usize>,
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Parse command line arguments
    pub fn parse() -> Self {
        let matches = Command::new("mentio-server")
            .version(mentio::VERSION)
            .about("HTTP API server for the Mentio entity recognition service")
            .long_about(
                r#"Mentio Server exposes batch named-entity recognition over HTTP,
shaped to the cognitive-search custom skill contract: a batch of
{recordId, data} records in, a batch of results in the same order out.

The server can be configured through command line arguments or environment
variables. Command line arguments take precedence over environment variables.

Examples:
  mentio-server --port 8080
  mentio-server --route-prefix /api/ner --log-level debug"#,
            )
            .arg(
                Arg::new("port")
                    .short('p')
                    .long("port")
                    .value_name("PORT")
                    .help("Port to listen on")
                    .long_help(
                        "Port number for the HTTP server to listen on.
Environment variable: MENTIO_PORT",
                    )
                    .value_hint(ValueHint::Other)
                    .value_parser(clap::value_parser!(u16)),
            )
            .arg(
                Arg::new("route_prefix")
                    .long("route-prefix")
                    .value_name("PREFIX")
                    .help("Externally visible URL path prefix")
                    .long_help(
                        "URL path prefix the service is mounted under by the
cluster ingress. Shapes the docs redirect and the OpenAPI server entry;
routes themselves stay at the root since the ingress strips the prefix.
Environment variable: MENTIO_ROUTE_PREFIX (falls back to CLUSTER_ROUTE_PREFIX)",
                    )
                    .value_hint(ValueHint::Other),
            )
            .arg(
                Arg::new("max_request_size")
                    .long("max-request-size")
                    .value_name("BYTES")
                    .help("Maximum request body size in bytes")
                    .long_help(
                        "Maximum size allowed for HTTP request bodies.
Larger requests will be rejected.
Environment variable: MENTIO_MAX_REQUEST_SIZE",
                    )
                    .value_parser(clap::value_parser!(usize)),
            )
            .arg(
                Arg::new("max_batch_size")
                    .long("max-batch-size")
                    .value_name("RECORDS")
                    .help("Maximum number of records per batch")
                    .long_help(
                        "Maximum number of records accepted in a single batch
request. Larger batches are rejected before any record is processed.
Environment variable: MENTIO_MAX_BATCH_SIZE",
                    )
                    .value_parser(clap::value_parser!(usize)),
            )
            .arg(
                Arg::new("max_concurrency")
                    .long("max-concurrency")
                    .value_name("TASKS")
                    .help("Documents processed concurrently per request")
                    .long_help(
                        "Upper bound on documents from one batch processed
concurrently. Results are always returned in input order.
Environment variable: MENTIO_MAX_CONCURRENCY",
                    )
                    .value_parser(clap::value_parser!(usize)),
            )
            .arg(
                Arg::new("log_level")
                    .long("log-level")
                    .value_name("LEVEL")
                    .help("Logging level")
                    .long_help(
                        "Set the logging level. Valid values: error, warn, info, debug, trace
Environment variable: RUST_LOG",
                    )
                    .value_parser(["error", "warn", "info", "debug", "trace"]),
            )
            .arg(
                Arg::new("help_env")
                    .long("help-env")
                    .help("Show all environment variables")
                    .long_help(
                        "Display a comprehensive list of all environment variables
that can be used to configure the server.",
                    )
                    .action(ArgAction::SetTrue),
            )
            .get_matches();

        if matches.get_flag("help_env") {
            Self::print_env_help();
            std::process::exit(0);
        }

        Self {
            port: matches.get_one::<u16>("port").copied(),
            route_prefix: matches.get_one::<String>("route_prefix").cloned(),
            max_request_size: matches.get_one::<usize>("max_request_size").copied(),
            max_batch_size: matches.get_one::<usize>("max_batch_size").copied(),
            max_concurrency: matches.get_one::<usize>("max_concurrency").copied(),
            log_level: matches.get_one::<String>("log_level").cloned(),
        }
    }

    /// Print comprehensive environment variable help
    fn print_env_help() {
        println!("Mentio Server Environment Variables");
        println!("===================================");
        println!();
        println!("Server Configuration:");
        println!("  MENTIO_PORT              - Server port (default: 8000)");
        println!("  MENTIO_ROUTE_PREFIX      - Externally visible URL path prefix (default: empty)");
        println!("  CLUSTER_ROUTE_PREFIX     - Prefix fallback set by the hosting platform");
        println!("  MENTIO_MAX_REQUEST_SIZE  - Max request body size in bytes (default: 16MB)");
        println!();
        println!("Batch Processing:");
        println!("  MENTIO_MAX_BATCH_SIZE    - Max records per batch (default: 1000)");
        println!("  MENTIO_MAX_CONCURRENCY   - Documents processed concurrently (default: 8)");
        println!();
        println!("Logging:");
        println!("  RUST_LOG                 - Logging level (error, warn, info, debug, trace)");
        println!();
        println!("Note: Command line arguments take precedence over environment variables.");
        println!("Use --help for CLI argument documentation.");
    }
}
