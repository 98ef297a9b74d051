// Command-line front end for the mandala engine and the ASCII pipeline.
//
// Usage:
//   mandala svg    [options] -o <out.svg>
//   mandala png    [options] -o <out.png>
//   mandala ascii  [options] [-o <out.txt>]
//   mandala glyphs [options] -o <out.svg>
//   mandala save   [options] -o <project.json>
//   mandala presets
//   mandala patterns
//
// Options:
//   --project <file>   start from a saved project (or bare settings JSON)
//   --preset <name>    start from a named preset
//   --pattern <id>     override the pattern type
//   --seed <n>         override the seed
//   --randomize        randomize every knob before rendering
//   --size <WxH>       output document size (default 800x800)
//   --columns <n>      ASCII columns
//
// Options apply as project, preset, randomize, then the single-field
// overrides, whatever order they are given in.

use std::path::Path;
use std::process;

use mandala_ascii::{
    export_png, output_slot, strip_trailing_blank, AsciiPipeline, Artifact, GlyphConfig, Outcome, SvgRasterizer,
};
use mandala_core::{load_project, save_project, PatternType, ProjectFile};
use mandala_engine::{find_pattern, find_preset, generate, presets};

const PNG_SCALE: f64 = 3.0;

struct Options {
    project: ProjectFile,
    width: u32,
    height: u32,
    output: Option<String>,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "presets" => {
            cmd_presets();
            Ok(())
        }
        "patterns" => {
            cmd_patterns();
            Ok(())
        }
        "svg" | "png" | "ascii" | "glyphs" | "save" => {
            parse_options(&args[2..]).and_then(|options| match args[1].as_str() {
                "svg" => cmd_svg(&options),
                "png" => cmd_png(&options),
                "ascii" => cmd_ascii(&options),
                "glyphs" => cmd_glyphs(&options),
                _ => cmd_save(&options),
            })
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("mandala: {e}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!("mandala - geometric mandala generator with ASCII export");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  svg    [options] -o <out.svg>       write the pattern document");
    eprintln!("  png    [options] -o <out.png>       write a 3x raster export");
    eprintln!("  ascii  [options] [-o <out.txt>]     encode the pattern as text");
    eprintln!("  glyphs [options] -o <out.svg>       re-vectorize the text as glyph paths");
    eprintln!("  save   [options] -o <project.json>  write the resolved project file");
    eprintln!("  presets                             list presets");
    eprintln!("  patterns                            list pattern types");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --project <file>  --preset <name>  --pattern <id>  --seed <n>");
    eprintln!("  --randomize  --size <WxH>  --columns <n>");
    eprintln!();
    eprintln!("Options apply in this order regardless of position: --project, --preset,");
    eprintln!("--randomize, then --pattern, --seed and --columns.");
}

/// Options apply in a fixed order whatever their position on the command
/// line: project, preset, randomize, then the single-field overrides.
fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut project_path = None;
    let mut preset_name = None;
    let mut randomize = false;
    let mut overrides = Vec::new();
    let mut options = Options { project: ProjectFile::default(), width: 800, height: 800, output: None };

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        if flag == "--randomize" {
            randomize = true;
            i += 1;
            continue;
        }

        let value = args.get(i + 1).ok_or_else(|| format!("missing value for {flag}"))?;
        match flag {
            "--project" => project_path = Some(value.as_str()),
            "--preset" => preset_name = Some(value.as_str()),
            "--pattern" | "--seed" | "--columns" => overrides.push((flag, value.as_str())),
            "--size" => {
                let (w, h) = value.split_once('x').ok_or_else(|| format!("invalid size {value}, expected WxH"))?;
                options.width = w.parse().map_err(|e| format!("invalid width {w}: {e}"))?;
                options.height = h.parse().map_err(|e| format!("invalid height {h}: {e}"))?;
            }
            "-o" => options.output = Some(value.clone()),
            _ => return Err(format!("unknown option: {flag}")),
        }
        i += 2;
    }

    if let Some(path) = project_path {
        options.project =
            load_project(Path::new(path)).map_err(|e| format!("failed to load project {path}: {e}"))?;
    }
    if let Some(name) = preset_name {
        let preset = find_preset(name).ok_or_else(|| format!("unknown preset: {name}"))?;
        options.project.pattern = preset.settings(options.project.pattern.seed);
    }
    if randomize {
        options.project.pattern = options.project.pattern.randomized(&mut rand::rng());
    }

    let pattern = &mut options.project.pattern;
    for (flag, value) in overrides {
        match flag {
            "--pattern" => pattern.pattern_type = value.parse::<PatternType>()?,
            "--seed" => pattern.seed = value.parse().map_err(|e| format!("invalid seed {value}: {e}"))?,
            _ => {
                options.project.ascii.columns =
                    value.parse().map_err(|e| format!("invalid column count {value}: {e}"))?;
            }
        }
    }

    Ok(options)
}

fn require_output(options: &Options) -> Result<&str, String> {
    options.output.as_deref().ok_or_else(|| "an output path is required (-o <path>)".to_string())
}

fn write_file(path: &str, contents: impl AsRef<[u8]>) -> Result<(), String> {
    std::fs::write(path, contents).map_err(|e| format!("failed to write {path}: {e}"))?;
    println!("Saved: {path}");
    Ok(())
}

fn document(options: &Options) -> String {
    generate(&options.project.pattern, options.width, options.height)
}

fn cmd_presets() {
    println!("Available presets:");
    for preset in presets() {
        println!("  {:<16} {}", preset.name, preset.description);
    }
}

fn cmd_patterns() {
    println!("Available patterns:");
    for kind in PatternType::ALL {
        if let Some(entry) = find_pattern(kind) {
            println!("  {:<12} {}", entry.id, entry.description);
        }
    }
}

fn cmd_svg(options: &Options) -> Result<(), String> {
    write_file(require_output(options)?, document(options))
}

fn cmd_png(options: &Options) -> Result<(), String> {
    let output = require_output(options)?;
    let png = export_png(&document(options), PNG_SCALE, &options.project.pattern.background_color)?;
    write_file(output, png)
}

fn cmd_save(options: &Options) -> Result<(), String> {
    let output = require_output(options)?;
    save_project(Path::new(output), &options.project).map_err(|e| format!("failed to save project {output}: {e}"))?;
    println!("Saved: {output}");
    Ok(())
}

fn runtime() -> Result<tokio::runtime::Runtime, String> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start runtime: {e}"))
}

/// Run the ASCII stage and return the committed text.
fn ascii_text(runtime: &tokio::runtime::Runtime, options: &Options) -> Result<String, String> {
    let (slot, rx) = output_slot();
    let (glyph_slot, _glyph_rx) = output_slot();
    let pipeline = AsciiPipeline::new(SvgRasterizer, slot, glyph_slot);
    let outcome = runtime.block_on(pipeline.generate(document(options), options.project.ascii.clone()));
    log::debug!("ASCII run finished: {outcome:?}");

    match rx.try_recv() {
        Ok(Artifact::Ascii(text)) if outcome == Outcome::Committed => Ok(strip_trailing_blank(&text)),
        _ => Err("ASCII conversion produced no output".to_string()),
    }
}

fn cmd_ascii(options: &Options) -> Result<(), String> {
    let text = ascii_text(&runtime()?, options)?;
    match options.output.as_deref() {
        Some(path) => write_file(path, text),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

fn cmd_glyphs(options: &Options) -> Result<(), String> {
    let output = require_output(options)?;
    let runtime = runtime()?;
    let text = ascii_text(&runtime, options)?;

    let (ascii_slot, _ascii_rx) = output_slot();
    let (slot, rx) = output_slot();
    let pipeline = AsciiPipeline::new(SvgRasterizer, ascii_slot, slot);
    let outcome = runtime.block_on(pipeline.vectorize(text, GlyphConfig::default()));

    match rx.try_recv() {
        Ok(Artifact::Vector(svg)) if outcome == Outcome::Committed => write_file(output, svg),
        _ => Err("glyph vectorization produced no output".to_string()),
    }
}
