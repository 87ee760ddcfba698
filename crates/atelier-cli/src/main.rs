//! Atelier CLI - Parametric Furniture Generation Frontend
//!
//! A tool for generating individual furniture pieces and whole event sets
//! from the command line.

use atelier_core::{
    BudgetRange, CraftsmanshipLevel, Culture, EventType, Formality, FurnitureType, Material,
    StylePreset,
};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

/// Atelier - Parametric Furniture Generation
#[derive(Parser)]
#[command(name = "atelier")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a single furniture piece
    Generate {
        /// Furniture archetype
        #[arg(value_enum)]
        furniture_type: FurnitureTypeArg,

        /// Design culture
        #[arg(short, long, value_enum, default_value = "modern")]
        culture: CultureArg,

        /// Style preset
        #[arg(short, long, value_enum, default_value = "contemporary")]
        style: StyleArg,

        /// Primary material
        #[arg(short, long, value_enum, default_value = "oak")]
        material: MaterialArg,

        /// Occasion formality
        #[arg(short, long, value_enum, default_value = "semi-formal")]
        formality: FormalityArg,

        /// Decorative intensity, 0.0 to 1.0
        #[arg(short, long, default_value = "0.5")]
        intensity: f64,

        /// Craftsmanship level
        #[arg(long, value_enum, default_value = "refined")]
        craftsmanship: CraftsmanshipArg,

        /// Width in meters (archetype default when omitted)
        #[arg(long)]
        width: Option<f64>,

        /// Height in meters
        #[arg(long)]
        height: Option<f64>,

        /// Depth in meters
        #[arg(long)]
        depth: Option<f64>,

        /// Output file for the piece JSON
        #[arg(short, long)]
        output: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Plan and generate a full furniture set for an event
    Plan {
        /// Kind of event
        #[arg(value_enum)]
        event: EventArg,

        /// Number of guests to seat
        #[arg(short, long, default_value = "6")]
        guests: u32,

        /// Design culture for the whole set
        #[arg(short, long, value_enum, default_value = "modern")]
        culture: CultureArg,

        /// Occasion formality
        #[arg(short, long, value_enum, default_value = "semi-formal")]
        formality: FormalityArg,

        /// Budget band
        #[arg(short, long, value_enum, default_value = "standard")]
        budget: BudgetArg,

        /// Output file for the set JSON
        #[arg(short, long)]
        output: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the built-in cultural rule sets
    Cultures,

    /// Run an interactive-style preview demo with debounced regeneration
    Preview {
        /// Furniture archetype to preview
        #[arg(value_enum, default_value = "chair")]
        furniture_type: FurnitureTypeArg,

        /// Design culture
        #[arg(short, long, value_enum, default_value = "japanese")]
        culture: CultureArg,

        /// Number of simulated edits
        #[arg(short, long, default_value = "4")]
        edits: u32,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum FurnitureTypeArg {
    Chair,
    DiningTable,
    CoffeeTable,
    SideTable,
    Sofa,
    Bench,
}

impl From<FurnitureTypeArg> for FurnitureType {
    fn from(arg: FurnitureTypeArg) -> Self {
        match arg {
            FurnitureTypeArg::Chair => Self::Chair,
            FurnitureTypeArg::DiningTable => Self::DiningTable,
            FurnitureTypeArg::CoffeeTable => Self::CoffeeTable,
            FurnitureTypeArg::SideTable => Self::SideTable,
            FurnitureTypeArg::Sofa => Self::Sofa,
            FurnitureTypeArg::Bench => Self::Bench,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum CultureArg {
    Japanese,
    Scandinavian,
    Italian,
    French,
    Modern,
}

impl From<CultureArg> for Culture {
    fn from(arg: CultureArg) -> Self {
        match arg {
            CultureArg::Japanese => Self::Japanese,
            CultureArg::Scandinavian => Self::Scandinavian,
            CultureArg::Italian => Self::Italian,
            CultureArg::French => Self::French,
            CultureArg::Modern => Self::Modern,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum StyleArg {
    Traditional,
    Contemporary,
    Rustic,
    Elegant,
    Minimalist,
    Ornate,
}

impl From<StyleArg> for StylePreset {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Traditional => Self::Traditional,
            StyleArg::Contemporary => Self::Contemporary,
            StyleArg::Rustic => Self::Rustic,
            StyleArg::Elegant => Self::Elegant,
            StyleArg::Minimalist => Self::Minimalist,
            StyleArg::Ornate => Self::Ornate,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum MaterialArg {
    Oak,
    Walnut,
    Pine,
    Cherry,
    Bamboo,
    Ash,
    Linen,
    Wool,
    Silk,
    Cotton,
    Steel,
    Brass,
    Leather,
    Ceramic,
    Glass,
    Stone,
}

impl From<MaterialArg> for Material {
    fn from(arg: MaterialArg) -> Self {
        match arg {
            MaterialArg::Oak => Self::Oak,
            MaterialArg::Walnut => Self::Walnut,
            MaterialArg::Pine => Self::Pine,
            MaterialArg::Cherry => Self::Cherry,
            MaterialArg::Bamboo => Self::Bamboo,
            MaterialArg::Ash => Self::Ash,
            MaterialArg::Linen => Self::Linen,
            MaterialArg::Wool => Self::Wool,
            MaterialArg::Silk => Self::Silk,
            MaterialArg::Cotton => Self::Cotton,
            MaterialArg::Steel => Self::Steel,
            MaterialArg::Brass => Self::Brass,
            MaterialArg::Leather => Self::Leather,
            MaterialArg::Ceramic => Self::Ceramic,
            MaterialArg::Glass => Self::Glass,
            MaterialArg::Stone => Self::Stone,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum FormalityArg {
    Casual,
    SemiFormal,
    Formal,
    Ceremonial,
}

impl From<FormalityArg> for Formality {
    fn from(arg: FormalityArg) -> Self {
        match arg {
            FormalityArg::Casual => Self::Casual,
            FormalityArg::SemiFormal => Self::SemiFormal,
            FormalityArg::Formal => Self::Formal,
            FormalityArg::Ceremonial => Self::Ceremonial,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum CraftsmanshipArg {
    Simple,
    Refined,
    Masterwork,
}

impl From<CraftsmanshipArg> for CraftsmanshipLevel {
    fn from(arg: CraftsmanshipArg) -> Self {
        match arg {
            CraftsmanshipArg::Simple => Self::Simple,
            CraftsmanshipArg::Refined => Self::Refined,
            CraftsmanshipArg::Masterwork => Self::Masterwork,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum EventArg {
    FormalDinner,
    CasualDining,
    TeaCeremony,
    Reception,
    FamilyGathering,
    Conference,
}

impl From<EventArg> for EventType {
    fn from(arg: EventArg) -> Self {
        match arg {
            EventArg::FormalDinner => Self::FormalDinner,
            EventArg::CasualDining => Self::CasualDining,
            EventArg::TeaCeremony => Self::TeaCeremony,
            EventArg::Reception => Self::Reception,
            EventArg::FamilyGathering => Self::FamilyGathering,
            EventArg::Conference => Self::Conference,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum BudgetArg {
    Economy,
    Standard,
    Premium,
    Luxury,
}

impl From<BudgetArg> for BudgetRange {
    fn from(arg: BudgetArg) -> Self {
        match arg {
            BudgetArg::Economy => Self::Economy,
            BudgetArg::Standard => Self::Standard,
            BudgetArg::Premium => Self::Premium,
            BudgetArg::Luxury => Self::Luxury,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Full piece JSON
    Json,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(!cli.no_color)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Generate {
            furniture_type,
            culture,
            style,
            material,
            formality,
            intensity,
            craftsmanship,
            width,
            height,
            depth,
            output,
            format,
        } => {
            let spec = commands::generate::PieceSpec {
                furniture_type: furniture_type.into(),
                culture: culture.into(),
                style: style.into(),
                material: material.into(),
                formality: formality.into(),
                intensity,
                craftsmanship: craftsmanship.into(),
                width,
                height,
                depth,
            };
            commands::generate::run(&spec, output.as_deref(), format == OutputFormat::Json)?;
        }

        Commands::Plan {
            event,
            guests,
            culture,
            formality,
            budget,
            output,
            format,
        } => {
            commands::plan::run(
                event.into(),
                guests,
                culture.into(),
                formality.into(),
                budget.into(),
                output.as_deref(),
                format == OutputFormat::Json,
            )
            .await?;
        }

        Commands::Cultures => {
            commands::cultures::run();
        }

        Commands::Preview {
            furniture_type,
            culture,
            edits,
        } => {
            commands::preview::run(furniture_type.into(), culture.into(), edits).await?;
        }
    }

    Ok(())
}
