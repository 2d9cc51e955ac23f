use clap::{Parser, Subcommand, ValueEnum};
use pharmops_registry::{
    departments, messages, severity, validation, Catalog, ExportFormat, MessageCategory,
    RoleCapabilityRegistry,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pharmops")]
#[command(about = "PharmOps registry CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Json => ExportFormat::Json,
            Format::Yaml => ExportFormat::Yaml,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List all roles
    Roles,
    /// Describe a role
    Describe {
        /// Role identifier (e.g. pharmacist)
        role: String,
    },
    /// Route an admission type to its priority and delivery mode
    Route {
        /// Admission type (emergency, planned, transfer, outpatient)
        admission_type: String,
    },
    /// Check a value against a validation pattern
    Validate {
        /// Pattern name (e.g. email, patientId)
        pattern: String,
        /// Value to check
        value: String,
    },
    /// List severity levels
    Severities,
    /// List departments
    Departments,
    /// List system messages
    Messages {
        /// Only show one category (success, error, warning)
        #[arg(long)]
        category: Option<String>,
    },
    /// Export the full catalog
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: Format,
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let registry = RoleCapabilityRegistry::new();

    match cli.command {
        Some(Commands::Roles) => {
            for role in registry.roles() {
                println!("{:<16} {}", role.id, role.display_name);
            }
        }
        Some(Commands::Describe { role }) => match registry.describe(&role) {
            Ok(profile) => {
                println!("{} ({})", profile.display_name, profile.id);
                println!("{}", profile.description);
                println!("Permissions:");
                for p in profile.permissions {
                    println!("  - {}", p);
                }
                println!("Features:");
                for f in profile.features {
                    println!("  - {}", f);
                }
            }
            Err(e) => eprintln!("Error describing role: {}", e),
        },
        Some(Commands::Route { admission_type }) => {
            match registry.route_admission(&admission_type) {
                Ok(route) => println!(
                    "{}: priority {}, delivery {}",
                    admission_type, route.priority, route.delivery_mode
                ),
                Err(e) => eprintln!("Error routing admission: {}", e),
            }
        }
        Some(Commands::Validate { pattern, value }) => {
            match validation::validate_named(&pattern, &value) {
                Ok(()) => println!("valid"),
                Err(e) => {
                    eprintln!("invalid: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Severities) => {
            for s in severity::profiles() {
                println!("{} {:<10} {}", s.priority, s.level, s.color);
            }
        }
        Some(Commands::Departments) => {
            for d in departments::profiles() {
                println!("{:<5} {}", d.code, d.name);
            }
        }
        Some(Commands::Messages { category }) => {
            let category = category
                .map(|c| c.parse::<MessageCategory>())
                .transpose()?;
            for m in messages::MESSAGES
                .iter()
                .filter(|m| category.map_or(true, |c| m.category == c))
            {
                println!("[{}] {}: {}", m.category, m.key, m.template);
            }
        }
        Some(Commands::Export { format, output }) => {
            let catalog = Catalog::snapshot();
            match output {
                Some(path) => {
                    catalog.write_to(&path, format.into())?;
                    println!("Wrote catalog to {}", path.display());
                }
                None => println!("{}", catalog.render(format.into())?),
            }
        }
        None => {
            println!("Use 'pharmops --help' for commands");
        }
    }

    Ok(())
}
