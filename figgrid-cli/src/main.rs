use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use figgrid::{
    Canvas, DEFAULT_SAVE_NAME, FigError, FigureSpec, GridLayout, ImageBox, ImageBoxConfig, Rgba8,
    SharedComponent, Size, TextAlign, TextLabel, TextLabelConfig,
};

#[derive(Parser, Debug)]
#[command(name = "figgrid", version)]
struct Cli {
    /// Log placement and render details.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a figure description (JSON) to an image file.
    Render(RenderArgs),
    /// Lay out images in a uniform grid, with an optional caption underneath.
    Grid(GridArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input figure JSON. Relative paths inside it resolve against its directory.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image path; the extension picks the format. An existing directory receives
    /// `CanvasRender.png`.
    #[arg(long)]
    out: PathBuf,

    /// Open the result in the system image viewer.
    #[arg(long, default_value_t = false)]
    show: bool,
}

#[derive(Parser, Debug)]
struct GridArgs {
    /// Cells per row.
    #[arg(long, default_value_t = 2)]
    columns: u32,

    /// Cell width in pixels.
    #[arg(long, default_value_t = 128)]
    cell_width: u32,

    /// Cell height in pixels.
    #[arg(long, default_value_t = 128)]
    cell_height: u32,

    /// Gap between cells in pixels.
    #[arg(long, default_value_t = 1)]
    pad: u32,

    /// Fill for gaps and the caption: `white`, `black`, `#RRGGBB` or `#RRGGBBAA`.
    #[arg(long, default_value = "white")]
    background: Rgba8,

    /// Caption drawn under the grid.
    #[arg(long)]
    caption: Option<String>,

    /// Caption height in pixels.
    #[arg(long, default_value_t = 32)]
    caption_height: u32,

    /// Caption alignment: left, center or right.
    #[arg(long, default_value = "center")]
    caption_align: String,

    /// Caption font file (system default serif font when omitted).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Caption font size in pixels.
    #[arg(long, default_value_t = 24.0)]
    font_size: f32,

    /// Output image path, or an existing directory to receive `CanvasRender.png`.
    #[arg(long)]
    out: PathBuf,

    /// Open the result in the system image viewer.
    #[arg(long, default_value_t = false)]
    show: bool,

    /// Images, placed row-major.
    #[arg(required = true)]
    images: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Grid(args) => cmd_grid(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let spec = FigureSpec::from_path(&args.in_path)?;
    let base_dir = args
        .in_path
        .parent()
        .unwrap_or_else(|| Path::new("."));
    let canvas = spec
        .build(base_dir)
        .with_context(|| format!("build figure '{}'", args.in_path.display()))?;
    write_canvas(&canvas, &args.out, args.show)
}

fn cmd_grid(args: GridArgs) -> anyhow::Result<()> {
    let cell = Size::new(args.cell_width, args.cell_height);
    let grid = GridLayout::new(args.columns, cell, args.pad)?;

    let mut tiles = Vec::<SharedComponent>::with_capacity(args.images.len());
    for image in &args.images {
        let tile = ImageBox::new(ImageBoxConfig {
            width: cell.width,
            height: cell.height,
            image: Some(image.clone()),
            ..ImageBoxConfig::default()
        })?;
        tiles.push(Arc::new(tile));
    }

    let mut canvas = Canvas::new().with_background(args.background);
    let count = grid.place_all(&mut canvas, tiles)?;

    if let Some(text) = args.caption {
        let align: TextAlign = args.caption_align.parse()?;
        let label = TextLabel::new(TextLabelConfig {
            width: grid.content_width(count)?,
            height: args.caption_height,
            text,
            font: args.font,
            font_size: args.font_size,
            text_align: align,
            background: args.background,
            ..TextLabelConfig::default()
        })?;
        let y = grid
            .content_height(count)?
            .checked_add(args.pad)
            .ok_or_else(|| FigError::validation("caption offset overflows u32"))?;
        canvas.add(0, y, Arc::new(label))?;
    }

    write_canvas(&canvas, &args.out, args.show)
}

fn write_canvas(canvas: &Canvas, out: &Path, show: bool) -> anyhow::Result<()> {
    if out.is_dir() {
        let written = canvas.render_to(out, DEFAULT_SAVE_NAME, show)?;
        eprintln!("wrote {}", written.display());
        return Ok(());
    }
    let dir = out.parent().unwrap_or_else(|| Path::new(""));
    let name = out
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("output path '{}' has no file name", out.display()))?;
    let written = canvas.render_to(dir, name, show)?;
    eprintln!("wrote {}", written.display());
    Ok(())
}
