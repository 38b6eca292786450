use clap::{Parser, ValueEnum};
use gray_binarizer::batch::{process_directory, DEFAULT_OUTPUT_DIR};
use gray_binarizer::config::{load_config, RunConfig};
use gray_binarizer::filters::BorderMode;
use gray_binarizer::image::io::write_json_file;
use gray_binarizer::pipeline::{run_single, RunOptions, RunOutput};
use gray_binarizer::preview::compose_preview;
use gray_binarizer::threshold::{AdaptiveOptions, ThresholdMethod};
use gray_binarizer::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const DEFAULT_PREVIEW_PATH: &str = "preview.png";

/// Convert images to grayscale and binary (black/white).
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Input image, or directory with --batch
    #[arg(short, long, required_unless_present = "config")]
    input: Option<PathBuf>,

    /// Output path; `_grayscale` / `_binary` are inserted before each `.`.
    /// With --batch, the output directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Global threshold; pixels strictly above it become white (default 128)
    #[arg(short, long, allow_negative_numbers = true)]
    threshold: Option<i32>,

    /// Process every image in the input directory
    #[arg(short, long)]
    batch: bool,

    /// Render original, grayscale and binary side by side into --preview-path
    #[arg(short, long)]
    display: bool,

    /// Use the local-mean binarizer instead of the global threshold
    #[arg(long)]
    adaptive: bool,

    /// Adaptive window side (odd, default 11)
    #[arg(long)]
    block_size: Option<usize>,

    /// Offset subtracted from the local mean (default 2)
    #[arg(long, allow_negative_numbers = true)]
    constant: Option<f64>,

    /// Border handling of the adaptive window
    #[arg(long, value_enum)]
    border: Option<BorderArg>,

    /// Also write the statistics as JSON
    #[arg(long)]
    stats_json: Option<PathBuf>,

    /// Where --display writes the side-by-side panel
    #[arg(long)]
    preview_path: Option<PathBuf>,

    /// JSON run configuration; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BorderArg {
    Nearest,
    Reflect,
    Zero,
}

impl From<BorderArg> for BorderMode {
    fn from(arg: BorderArg) -> Self {
        match arg {
            BorderArg::Nearest => BorderMode::Nearest,
            BorderArg::Reflect => BorderMode::Reflect,
            BorderArg::Zero => BorderMode::Zero,
        }
    }
}

/// Flags merged over the optional config file.
struct Settings {
    input: PathBuf,
    output: Option<PathBuf>,
    batch: bool,
    display: bool,
    method: ThresholdMethod,
    stats_json: Option<PathBuf>,
    preview_path: PathBuf,
}

impl Settings {
    fn resolve(args: Args, config: RunConfig) -> Result<Self, String> {
        let method = resolve_method(&args, config.threshold);
        let input = args
            .input
            .or(config.input)
            .ok_or("no input given (use --input or set \"input\" in the config)")?;
        Ok(Self {
            input,
            output: args.output.or(config.output),
            batch: args.batch || config.batch,
            display: args.display || config.display,
            method,
            stats_json: args.stats_json.or(config.stats_json),
            preview_path: args
                .preview_path
                .or(config.preview_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PREVIEW_PATH)),
        })
    }
}

fn resolve_method(args: &Args, configured: Option<ThresholdMethod>) -> ThresholdMethod {
    let method = match (args.adaptive, args.threshold, configured) {
        (true, _, Some(ThresholdMethod::Adaptive(options))) => ThresholdMethod::Adaptive(options),
        (true, _, _) => ThresholdMethod::Adaptive(AdaptiveOptions::default()),
        (false, Some(value), _) => ThresholdMethod::Global { value },
        (false, None, Some(method)) => method,
        (false, None, None) => ThresholdMethod::default(),
    };
    // window flags refine whichever adaptive settings were selected
    match method {
        ThresholdMethod::Adaptive(mut options) => {
            if let Some(block_size) = args.block_size {
                options.block_size = block_size;
            }
            if let Some(constant) = args.constant {
                options.constant = constant;
            }
            if let Some(border) = args.border {
                options.border = border.into();
            }
            ThresholdMethod::Adaptive(options)
        }
        global => global,
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = match args.config.as_deref().map(load_config).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let settings = match Settings::resolve(args, config) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = if settings.batch {
        run_batch(&settings)
    } else {
        run_one(&settings)
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_one(settings: &Settings) -> Result<(), Error> {
    let options = RunOptions {
        method: settings.method,
        output: settings.output.clone(),
    };
    let output = run_single(&settings.input, &options)?;
    println!(
        "Image loaded: {}x{}",
        output.image.width(),
        output.image.height()
    );
    report_saves(&output);

    println!("\nImage statistics:");
    print!("{}", output.stats);

    if let Some(path) = &settings.stats_json {
        write_json_file(path, &output.stats)?;
        println!("Statistics written to: {}", path.display());
    }
    if settings.display {
        write_preview(&output, &settings.preview_path)?;
    }
    Ok(())
}

fn report_saves(output: &RunOutput) {
    for path in &output.saved {
        println!("Image saved to: {}", path.display());
    }
    for err in &output.save_errors {
        eprintln!("Error saving image: {err}");
    }
}

fn write_preview(output: &RunOutput, path: &Path) -> Result<(), Error> {
    let panel = compose_preview(Some(&output.image), Some(&output.gray), Some(&output.binary))?;
    let (w, h) = panel.dimensions();
    match panel.save(path) {
        Ok(()) => println!("Preview ({w}x{h}) saved to: {}", path.display()),
        Err(err) => eprintln!("Error saving preview {}: {err}", path.display()),
    }
    Ok(())
}

fn run_batch(settings: &Settings) -> Result<(), Error> {
    let output_dir = settings
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    let report = process_directory(&settings.input, &output_dir, &settings.method)?;

    for item in &report.processed {
        println!("\n{}", item.input.display());
        report_saves(&item.output);
        print!("{}", item.output.stats);
    }
    for (path, err) in &report.failures {
        eprintln!("Error processing {}: {err}", path.display());
    }
    println!(
        "\nProcessed {} of {} image(s) into {}",
        report.processed.len(),
        report.total(),
        output_dir.display()
    );

    if let Some(path) = &settings.stats_json {
        let all: Vec<_> = report
            .processed
            .iter()
            .map(|item| (item.input.display().to_string(), &item.output.stats))
            .collect();
        write_json_file(path, &all)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(flags: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("gray-binarizer").chain(flags.iter().copied()))
            .unwrap()
    }

    fn adaptive_config(options: AdaptiveOptions) -> RunConfig {
        RunConfig {
            input: Some(PathBuf::from("configured.png")),
            threshold: Some(ThresholdMethod::Adaptive(options)),
            ..RunConfig::default()
        }
    }

    #[test]
    fn threshold_flag_overrides_configured_adaptive_method() {
        let config = adaptive_config(AdaptiveOptions::default());
        let settings = Settings::resolve(args(&["-i", "in.png", "-t", "90"]), config).unwrap();
        assert_eq!(settings.method, ThresholdMethod::Global { value: 90 });
        assert_eq!(settings.input, PathBuf::from("in.png"));
    }

    #[test]
    fn window_flags_refine_configured_adaptive_options() {
        let config = adaptive_config(AdaptiveOptions::new(15, 2.0).with_border(BorderMode::Zero));
        let flags = ["-i", "in.png", "--adaptive", "--block-size", "5"];
        let settings = Settings::resolve(args(&flags), config).unwrap();
        assert_eq!(
            settings.method,
            ThresholdMethod::Adaptive(AdaptiveOptions::new(5, 2.0).with_border(BorderMode::Zero))
        );
    }

    #[test]
    fn adaptive_flag_without_config_uses_defaults() {
        let flags = ["-i", "in.png", "--adaptive", "--constant", "-3", "--border", "reflect"];
        let settings = Settings::resolve(args(&flags), RunConfig::default()).unwrap();
        assert_eq!(
            settings.method,
            ThresholdMethod::Adaptive(
                AdaptiveOptions::new(11, -3.0).with_border(BorderMode::Reflect)
            )
        );
    }

    #[test]
    fn configured_method_applies_without_flags() {
        let config = adaptive_config(AdaptiveOptions::new(21, 5.0));
        let settings = Settings::resolve(args(&["--config", "run.json"]), config).unwrap();
        assert_eq!(settings.method, ThresholdMethod::Adaptive(AdaptiveOptions::new(21, 5.0)));
        assert_eq!(settings.input, PathBuf::from("configured.png"));
    }

    #[test]
    fn no_flags_and_no_config_is_global_128() {
        let settings = Settings::resolve(args(&["-i", "in.png"]), RunConfig::default()).unwrap();
        assert_eq!(settings.method, ThresholdMethod::Global { value: 128 });
        assert_eq!(settings.preview_path, PathBuf::from(DEFAULT_PREVIEW_PATH));
        assert!(!settings.batch);
    }

    #[test]
    fn flags_override_config_paths() {
        let config = RunConfig {
            input: Some(PathBuf::from("configured.png")),
            output: Some(PathBuf::from("configured_out.png")),
            preview_path: Some(PathBuf::from("configured_panel.png")),
            ..RunConfig::default()
        };
        let flags = ["-i", "in.png", "-o", "out.png", "--config", "run.json"];
        let settings = Settings::resolve(args(&flags), config).unwrap();
        assert_eq!(settings.input, PathBuf::from("in.png"));
        assert_eq!(settings.output, Some(PathBuf::from("out.png")));
        assert_eq!(settings.preview_path, PathBuf::from("configured_panel.png"));
    }

    #[test]
    fn missing_input_is_an_error() {
        let result = Settings::resolve(args(&["--config", "run.json"]), RunConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn input_is_required_without_a_config() {
        let result = Args::try_parse_from(["gray-binarizer", "-t", "90"]);
        assert!(result.is_err());
    }
}
