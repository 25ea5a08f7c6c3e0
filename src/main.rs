//! Command-line interface for enunciate

#[cfg(feature = "cli")]
use clap::{ArgAction, Parser, Subcommand};

#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};
#[cfg(feature = "cli")]
use std::process::ExitCode;
#[cfg(feature = "cli")]
use std::sync::Arc;

#[cfg(feature = "cli")]
use enunciate::definitions::{DefinitionValidator, TypeDefinition};
#[cfg(feature = "cli")]
use enunciate::exports::write_simple_type;
#[cfg(feature = "cli")]
use enunciate::ignore::is_ignored;
#[cfg(feature = "cli")]
use enunciate::objc::ObjCValidator;
#[cfg(feature = "cli")]
use enunciate::types::{
    decorate_with_restrictions, find_explicit_schema_type, inapplicable_restrictions,
    PackageTypeCache,
};
#[cfg(feature = "cli")]
use enunciate::validation::{collect_constraints, describe_constraints, is_required};
#[cfg(feature = "cli")]
use enunciate::{Declaration, Error, KnownXmlType, LengthBoundPolicy, Result, Settings, XmlType};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "enunciate")]
#[command(author, version, about = "Bean Validation constraints and XML Schema facets for declaration snapshots", long_about = None)]
struct Cli {
    /// Settings file (JSON)
    #[arg(short, long, global = true, value_name = "SETTINGS")]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the active constraints of a declaration
    Constraints {
        /// Declaration snapshot (JSON)
        #[arg(value_name = "DECL")]
        declaration: PathBuf,

        /// Validation group to ignore (qualified class name)
        #[arg(short = 'g', long = "ignore-group", value_name = "GROUP")]
        ignore_groups: Vec<String>,

        /// Treat the declaration as required
        #[arg(long)]
        required: bool,

        /// Output the constraints as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Restrict a base type by the constraints of a declaration
    Restrict {
        /// Declaration snapshot (JSON)
        #[arg(value_name = "DECL")]
        declaration: PathBuf,

        /// Base XML type (e.g. string, xs:int); defaults to the explicit schema type
        #[arg(short, long, value_name = "TYPE")]
        base: Option<String>,

        /// Package declaration snapshot carrying @XmlSchemaType overrides (JSON)
        #[arg(short, long, value_name = "PACKAGE")]
        package: Option<PathBuf>,

        /// Qualified Java type of the accessor, to look up package overrides
        #[arg(short = 't', long, value_name = "JAVA_TYPE")]
        item_type: Option<String>,

        /// Read @Max/@Min as length bounds on every string-like type
        #[arg(long)]
        string_like: bool,

        /// Output an xs:simpleType fragment
        #[arg(long)]
        xsd: bool,
    },

    /// Check type definitions against the Objective-C client
    Objc {
        /// Type definitions (JSON array)
        #[arg(value_name = "DEFS")]
        definitions: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = load_settings(cli.config.as_deref()).and_then(|settings| match cli.command {
        Commands::Constraints {
            declaration,
            ignore_groups,
            required,
            json,
        } => cmd_constraints(settings, declaration, ignore_groups, required, json),
        Commands::Restrict {
            declaration,
            base,
            package,
            item_type,
            string_like,
            xsd,
        } => cmd_restrict(settings, declaration, base, package, item_type, string_like, xsd),
        Commands::Objc { definitions } => cmd_objc(definitions),
    });

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "cli")]
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::from_file(path),
        None => Ok(Settings::default()),
    }
}

#[cfg(feature = "cli")]
fn load_declaration(path: &Path) -> Result<Declaration> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(feature = "cli")]
fn cmd_constraints(
    settings: Settings,
    declaration_path: PathBuf,
    ignore_groups: Vec<String>,
    required: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let declaration = load_declaration(&declaration_path)?;
    let settings = ignore_groups
        .into_iter()
        .fold(settings, |settings, group| settings.with_ignored_group(group));
    let groups = settings.group_filter();

    if is_ignored(&declaration) {
        eprintln!("note: {} is marked as ignored", declaration.name);
    }

    let required = required || is_required(&declaration, &groups);

    if json_output {
        let constraints = collect_constraints(&declaration, &groups)?;
        println!("{}", serde_json::to_string_pretty(&constraints)?);
        return Ok(ExitCode::SUCCESS);
    }

    match describe_constraints(&declaration, required, &groups)? {
        Some(description) => println!("{}: {}", declaration.name, description),
        None => println!("{}: no constraints", declaration.name),
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(feature = "cli")]
fn cmd_restrict(
    settings: Settings,
    declaration_path: PathBuf,
    base: Option<String>,
    package_path: Option<PathBuf>,
    item_type: Option<String>,
    string_like: bool,
    xsd: bool,
) -> Result<ExitCode> {
    let declaration = load_declaration(&declaration_path)?;
    let settings = if string_like {
        settings.with_length_bound_policy(LengthBoundPolicy::StringLike)
    } else {
        settings
    };

    let base = match base {
        Some(name) => XmlType::from(
            KnownXmlType::from_name(&name)
                .ok_or_else(|| Error::Type(format!("unknown XML type: {}", name)))?,
        ),
        None => {
            let package = match package_path {
                Some(path) => load_declaration(&path)?,
                None => Declaration::package(declaration.package.clone().unwrap_or_default()),
            };
            let cache = PackageTypeCache::new();
            find_explicit_schema_type(&declaration, item_type.as_deref(), &package, &cache)?
                .ok_or_else(|| {
                    Error::Type(format!(
                        "no base type given and no explicit schema type found for {}",
                        declaration.name
                    ))
                })?
        }
    };

    let decorated = decorate_with_restrictions(Arc::new(base), &declaration, &settings)?;

    if settings.report_inapplicable_facets {
        for restriction in inapplicable_restrictions(&decorated) {
            eprintln!(
                "warning: {} is not applicable to {}",
                restriction.facet,
                decorated.qname()
            );
        }
    }

    if xsd {
        println!("{}", write_simple_type(&decorated, Some(declaration.name.as_str()))?);
    } else if decorated.restrictions().is_empty() {
        println!("{}: unrestricted", decorated.name());
    } else {
        for restriction in decorated.restrictions() {
            println!("{}", restriction);
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(feature = "cli")]
fn cmd_objc(definitions_path: PathBuf) -> Result<ExitCode> {
    let text = fs::read_to_string(&definitions_path)?;
    let definitions: Vec<TypeDefinition> = serde_json::from_str(&text)?;

    let result = ObjCValidator::new().validate_all(&definitions);
    for diagnostic in result.diagnostics() {
        println!("{}", diagnostic);
    }

    if result.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
