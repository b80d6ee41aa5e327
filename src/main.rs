use clap::{Arg, ArgAction, Command};
use templet::error::ExpansionFailure;
use templet::values::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("templet")
        .version(VERSION)
        .propagate_version(true)
        .about("A string templating engine.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("expand")
                .about("Expand the given template with the given arguments")
                .arg(
                    Arg::new("template")
                        .required(true)
                        .help("The template text, with {index[subscript]:specifier} replacement fields."),
                )
                .arg(
                    Arg::new("arguments")
                        .num_args(0..)
                        .action(ArgAction::Append)
                        .help("Arguments for the replacement fields. Each is classified as a boolean, integer, float, or text value."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("expand", submatches)) => {
            let template = match submatches.get_one::<String>("template") {
                Some(template) => template,
                None => return,
            };

            let supplied: Vec<&String> = submatches
                .get_many::<String>("arguments")
                .map(|values| values.collect())
                .unwrap_or_default();

            let arguments: Vec<Value> = supplied
                .iter()
                .map(|text| classify(text))
                .collect();

            debug!("Expanding with {} arguments", arguments.len());

            match templet::expand(template, &arguments) {
                Ok(result) => println!("{}", result),
                Err(error) => {
                    let failure = ExpansionFailure::new(&error, template);
                    eprintln!("{}", failure.full_details());
                    std::process::exit(1);
                }
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: templet [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

/// Decide which kind of value a command line argument is: the words true
/// and false are booleans, then whole numbers, then floats, then text.
fn classify(text: &str) -> Value<'_> {
    if let Ok(value) = text.parse::<bool>() {
        return Value::Bool(value);
    }
    if let Ok(value) = text.parse::<i64>() {
        return Value::Long(value);
    }
    if let Ok(value) = text.parse::<f64>() {
        return Value::Double(value);
    }
    Value::Text(text)
}
