use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use rasterdoc_core::{
    DocumentArtifact, DocumentEncoder, ImageFileRenderer, PageFormat, PdfEncoder, Renderer,
    artifact_file_name, paginate, to_json_plan,
};
use serde::Deserialize;
use tracing::{error, info};
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(
    name = "rasterdoc",
    about = "Paginate rendered raster images into PDF documents",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Show progress bars (disable with --no-progress or --quiet)
    #[arg(long, default_value_t = true, action=ArgAction::Set, global=true, help_heading = "Logging/UX")]
    progress: bool,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Paginate image(s) and write PDF artifact(s)
    Render(RenderArgs),
    /// Layout-only: compute placements and export the plan as JSON (no PDF)
    Plan(RenderArgs),
}

#[derive(Parser, Debug, Clone)]
struct RenderArgs {
    // Input/Output
    /// Input image file or directory of images
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output directory
    #[arg(short, long, default_value = "out", help_heading = "Input/Output")]
    out_dir: PathBuf,
    /// Artifact identifier (files are named order-<id>.pdf); defaults to the
    /// input file stem, with a numeric suffix for directory inputs
    #[arg(long, help_heading = "Input/Output")]
    order_id: Option<String>,
    /// YAML config file path (overrides page-format options)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,

    // Page
    /// Named page format: a4 | a3 | a5 | letter | legal
    #[arg(long, default_value = "a4", help_heading = "Page")]
    format: String,
    /// Page width in mm (overrides --format)
    #[arg(long, help_heading = "Page")]
    page_width_mm: Option<f64>,
    /// Page height in mm (overrides --format)
    #[arg(long, help_heading = "Page")]
    page_height_mm: Option<f64>,

    // Export
    /// JPEG quality for the embedded image (1..=100)
    #[arg(long, default_value_t = 90, help_heading = "Export")]
    jpeg_quality: u8,
    /// Also write the placement plan JSON next to each PDF
    #[arg(long, default_value_t = false, help_heading = "Export")]
    export_plan: bool,
    /// Layout-only: write the plan JSON instead of a PDF
    #[arg(long, default_value_t = false, help_heading = "Export")]
    plan_only: bool,
    /// Dry run: compute placements and stats but do not write files
    #[arg(long, default_value_t = false, help_heading = "Export")]
    dry_run: bool,
}

/// YAML config file; fields set here override the matching CLI flags en bloc.
#[derive(Debug, Deserialize, Default)]
struct YamlConfig {
    format: Option<String>,
    page_width_mm: Option<f64>,
    page_height_mm: Option<f64>,
    jpeg_quality: Option<u8>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Render(args) => run_render(args, cli.progress && !cli.quiet),
        Commands::Plan(args) => {
            let mut a = args.clone();
            a.plan_only = true;
            run_render(&a, false)
        }
    }
}

fn run_render(cli: &RenderArgs, show_progress: bool) -> anyhow::Result<()> {
    if !cli.dry_run {
        fs::create_dir_all(&cli.out_dir)
            .with_context(|| format!("create out_dir {}", cli.out_dir.display()))?;
    }

    let (format, jpeg_quality) = resolve_format(cli)?;
    format
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid page format: {}", e))?;

    let inputs = gather_paths(&cli.input)?;
    if inputs.is_empty() {
        anyhow::bail!("no input images under {}", cli.input.display());
    }
    info!(count = inputs.len(), "found input images");

    let bar = make_progress(show_progress, inputs.len() as u64);
    let mut renderer = ImageFileRenderer::new();
    let mut encoder = PdfEncoder::with_quality(jpeg_quality);

    for (idx, path) in inputs.iter().enumerate() {
        let msg = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
        if let Some(b) = &bar {
            b.set_message(msg.to_string());
        }
        let artifact_id = artifact_id_for(cli, path, idx, inputs.len());
        if let Err(e) = process_one(cli, &mut renderer, &mut encoder, path, &artifact_id, &format) {
            error!(?path, error = %e, "skip input");
        }
        if let Some(b) = &bar {
            b.inc(1);
        }
    }
    if let Some(b) = &bar {
        b.finish_and_clear();
    }
    Ok(())
}

fn process_one(
    cli: &RenderArgs,
    renderer: &mut ImageFileRenderer,
    encoder: &mut PdfEncoder,
    path: &Path,
    artifact_id: &str,
    format: &PageFormat,
) -> anyhow::Result<()> {
    let reference = path.to_string_lossy().replace('\\', "/");

    // One capture feeds the plan export and the document bytes alike; the
    // JSON and the PDF always describe the same surface.
    let surface = renderer.capture(&reference)?;
    let plan = paginate(&surface, format)?;
    let stats = plan.stats();
    info!(
        id = artifact_id,
        pages = plan.page_count(),
        scaled_height_mm = format!("{:.2}", stats.scaled_height_mm),
        fill = format!("{:.2}%", stats.fill_ratio * 100.0),
        "plan computed"
    );

    if cli.dry_run {
        println!("{} {}", artifact_id, stats.summary());
        return Ok(());
    }
    if cli.plan_only || cli.export_plan {
        let json_path = cli.out_dir.join(format!("order-{}.json", artifact_id));
        let json = serde_json::to_string_pretty(&to_json_plan(&plan))?;
        fs::write(&json_path, json)
            .with_context(|| format!("write {}", json_path.display()))?;
        info!(?json_path, pages = plan.page_count(), "plan written");
        if cli.plan_only {
            return Ok(());
        }
    }

    let bytes = encoder.assemble(&surface, &plan)?;
    let artifact = DocumentArtifact {
        file_name: artifact_file_name(artifact_id, encoder.extension()),
        bytes,
    };
    let out_path = artifact
        .save_into(&cli.out_dir)
        .with_context(|| format!("write into {}", cli.out_dir.display()))?;
    info!(?out_path, bytes = artifact.bytes.len(), "document written");
    Ok(())
}

fn resolve_format(cli: &RenderArgs) -> anyhow::Result<(PageFormat, u8)> {
    // Config file sets page options en bloc over CLI flags
    let yaml: YamlConfig = if let Some(path) = &cli.config {
        let file = fs::read_to_string(path)?;
        serde_yaml::from_str(&file)?
    } else {
        YamlConfig::default()
    };

    let named = yaml.format.as_deref().unwrap_or(cli.format.as_str());
    let mut format: PageFormat = named
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown page format: {}", named))?;

    if let Some(w) = yaml.page_width_mm.or(cli.page_width_mm) {
        format.width_mm = w;
    }
    if let Some(h) = yaml.page_height_mm.or(cli.page_height_mm) {
        format.height_mm = h;
    }
    let quality = yaml.jpeg_quality.unwrap_or(cli.jpeg_quality);
    Ok((format, quality))
}

fn artifact_id_for(cli: &RenderArgs, path: &Path, idx: usize, total: usize) -> String {
    let stem = || {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("document")
            .to_string()
    };
    match &cli.order_id {
        Some(id) if total == 1 => id.clone(),
        Some(id) => format!("{}_{}", id, idx),
        None => stem(),
    }
}

fn gather_paths(path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut list: Vec<PathBuf> = Vec::new();
    if path.is_file() {
        if is_image(path) {
            list.push(path.to_path_buf());
        }
    } else {
        for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && is_image(p) {
                list.push(p.to_path_buf());
            }
        }
        list.sort();
    }
    Ok(list)
}

fn is_image(p: &Path) -> bool {
    matches!(
        p.extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase()),
        Some(ext) if matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "bmp" | "tga" | "gif")
    )
}

fn make_progress(progress: bool, len: u64) -> Option<indicatif::ProgressBar> {
    use indicatif::{ProgressBar, ProgressStyle};
    if !progress {
        return None;
    }
    let b = ProgressBar::new(len);
    b.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} paginating {pos}/{len} [{elapsed_precise}] {wide_msg}",
        )
        .unwrap(),
    );
    Some(b)
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
