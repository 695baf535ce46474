use clap::{Parser, Subcommand};
use num_complex::Complex64;
use pl_components::{Generator, ParallelCircuits, Transformer, TransmissionLine};
use pl_core::ModelError;
use pl_core::eng::{in_km, in_kv, in_mvar, in_mw, in_ohm, in_siemens};
use pl_library::{Library, LibraryError, books_from_json, sample_books};
use pl_lines::NetworkLine;
use pl_project::{ProjectError, ProjectModels};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "pl-cli")]
#[command(about = "PowerLab CLI - power-system element models and a book catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Demonstrate line, transformer and generator models
    Lab1,
    /// Demonstrate dispatch lines: classification and paralleling
    Lines,
    /// Demonstrate the book catalog
    Library {
        /// JSON file with an array of {id, name, pages} records
        #[arg(long)]
        books: Option<PathBuf>,
    },
    /// Validate a project file and build its models
    Validate {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
    },
    /// Build a project and print every model
    Show {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Library(#[from] LibraryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lab1 => cmd_lab1(),
        Commands::Lines => cmd_lines(),
        Commands::Library { books } => cmd_library(books.as_deref()),
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Show { project_path } => cmd_show(&project_path),
    }
}

fn cmd_lab1() -> CliResult<()> {
    let mut line = TransmissionLine::new(0.01, 0.03, 3.25, 100.0)?;
    print_line("Line (100 km)", &line);
    line.add_parallel_lines(2)?;
    print_line("After adding a second circuit", &line);
    line.line_compensation(-15.0)?;
    print_line("After series compensation of -15 Ω", &line);
    println!();

    let mut trans = Transformer::new(2.0, 20.0, -15.0, 115.0, 10.5)?;
    print_transformer("Transformer 115/10.5 kV", &trans);
    trans.bring_to_low_voltage();
    print_transformer("Referred to the LV winding", &trans);
    trans.soldering_changing(-2, 1.78)?;
    print_transformer("Tap changer at position -2 (1.78 %/step)", &trans);
    println!();

    let mut generator = Generator::new(15.75, 100.0, 0.75)?;
    print_generator("Generator 15.75 kV", &generator);
    generator.generation_changing(50.0)?;
    print_generator("Generation reduced to 50 MW", &generator);
    generator.motor_mode_switching(-50.0, 20.0)?;
    print_generator("Motor mode", &generator);
    if let Err(e) = generator.motor_mode_switching(-10.0, 20.0) {
        println!("✗ Motor mode -10 MW / 20 Mvar rejected: {e}");
    }

    Ok(())
}

fn cmd_lines() -> CliResult<()> {
    let mut lines = vec![
        NetworkLine::new("ВЛ-330 Каменный Бор-Петрозаводск", 171.0, 330.0)?,
        NetworkLine::overhead(
            "ВЛ-330 Кондопога-Петрозаводск",
            76.0,
            330.0,
            Complex64::new(1.0, 1.0),
            Complex64::new(0.5, 0.5),
        )?,
        NetworkLine::cable(
            "КЛ-220 Василеостровская-Северная",
            4.8,
            220.0,
            Complex64::new(0.1, 0.1),
            Complex64::new(0.05, 0.05),
            "XLPE",
        )?,
    ];

    for line in &lines {
        println!("{line}");
    }
    println!();

    for line in &lines {
        println!("{}", line.classification());
    }
    let backbone = lines.iter().filter(|line| line.is_backbone_line()).count();
    println!("Backbone lines: {backbone} of {}", lines.len());
    println!();

    for (line, circuits) in lines.iter_mut().zip([3, 2, 2]) {
        line.add_parallel_lines(circuits)?;
        print_network_line(line);
    }

    Ok(())
}

fn cmd_library(books_path: Option<&Path>) -> CliResult<()> {
    let empty_library = Library::new();
    println!("Next id in an empty library: {}", empty_library.get_next_book_id()?);

    let books = match books_path {
        Some(path) => books_from_json(&std::fs::read_to_string(path)?)?,
        None => sample_books()?,
    };
    for book in &books {
        println!("{book}");
    }

    let library_with_books = Library::with_books(books)?;
    println!("Next id: {}", library_with_books.get_next_book_id()?);

    let wanted = pl_library::BookId(1);
    match library_with_books.get_index_by_book_id(wanted) {
        Some(index) => println!("Book {wanted} is at index {index}"),
        None => println!("No book with id {wanted}"),
    }

    Ok(())
}

fn cmd_validate(project_path: &Path) -> CliResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = pl_project::load(project_path)?;
    let models = pl_project::build(&project)?;
    println!("✓ Project is valid");
    println!("  Lines: {}", models.lines.len());
    println!("  Transformers: {}", models.transformers.len());
    println!("  Generators: {}", models.generators.len());
    println!("  Network lines: {}", models.network_lines.len());
    println!("  Books: {}", models.library.len());
    Ok(())
}

fn cmd_show(project_path: &Path) -> CliResult<()> {
    let project = pl_project::load(project_path)?;
    info!(project = %project.name, "building project");
    let models = pl_project::build(&project)?;
    print_models(&project.name, &models);
    Ok(())
}

fn print_models(name: &str, models: &ProjectModels) {
    println!("Project: {name}");

    for named in &models.lines {
        print_line(&named.id, &named.model);
    }
    for named in &models.transformers {
        print_transformer(&named.id, &named.model);
    }
    for named in &models.generators {
        print_generator(&named.id, &named.model);
    }
    for line in &models.network_lines {
        print_network_line(line);
    }
    for book in models.library.books() {
        println!("{} (id {}, {} pages)", book, book.id(), book.pages());
    }
}

fn print_line(label: &str, line: &TransmissionLine) {
    println!("{label}");
    println!(
        "  R = {:.4} Ω, X = {:.4} Ω, B = {:.4e} S, length = {} km",
        in_ohm(line.r_line()),
        in_ohm(line.x_line()),
        in_siemens(line.b_line()),
        in_km(line.length())
    );
}

fn print_transformer(label: &str, trans: &Transformer) {
    println!("{label}");
    println!(
        "  R = {:.4} Ω, X = {:.4} Ω, B = {:.4e} S, k = {:.5} ({:?} side, {}/{} kV)",
        in_ohm(trans.r_trans()),
        in_ohm(trans.x_trans()),
        in_siemens(trans.b_trans()),
        trans.k_trans(),
        trans.referred_side(),
        in_kv(trans.u_high_volt()),
        in_kv(trans.u_low_volt())
    );
}

fn print_generator(label: &str, generator: &Generator) {
    println!("{label}");
    println!(
        "  P = {:.2} MW, Q = {:.2} Mvar, tg φ = {}, {:?}",
        in_mw(generator.p()),
        in_mvar(generator.q()),
        generator.tg_phi(),
        generator.mode()
    );
}

fn print_network_line(line: &NetworkLine) {
    println!("{line}");
    println!(
        "  conditional length = {} km, u_nom = {} kV",
        in_km(line.conditional_length()),
        in_kv(line.u_nom())
    );
    if let (Some(z), Some(y)) = (line.z(), line.y()) {
        println!("  z = {z} Ω, y = {y} µS");
    }
    if let Some(insulator) = line.insulator() {
        println!("  insulator: {insulator}");
    }
}
