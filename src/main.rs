use clap::{App, Arg};
use itertools::Itertools;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

fn main() -> anyhow::Result<()> {
    let matches = App::new(NAME)
        .version(VERSION)
        .about("Render a named colormap into a one-row texture image. Based on colormap.py")
        .arg(
            Arg::with_name("SPEC")
                .help("Colormap specifier, `module:dotted.path` or a bare preset name")
                .default_value(colormap_tex::DEFAULT_SPEC)
                .index(1),
        )
        .arg(
            Arg::with_name("OUTFILE")
                .help("Destination image path [default: colormap_{name}.bmp]")
                .index(2),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .help("Silence all output"),
        )
        .arg(
            Arg::with_name("list")
                .short("l")
                .long("list")
                .help("List the built-in colormap names and exit"),
        )
        .arg(
            Arg::with_name("all")
                .long("all")
                .help("Export every built-in colormap to its default file name, ignoring SPEC and OUTFILE"),
        )
        .get_matches();

    let verbose = matches.occurrences_of("verbose") as usize;
    let quiet = matches.is_present("quiet");
    stderrlog::new()
        .module(module_path!())
        .quiet(quiet)
        .verbosity(verbose)
        .init()
        .unwrap();

    if matches.is_present("list") {
        println!("{}", colormap_tex::registry::preset::NAMES.iter().join("\n"));
        return Ok(());
    }

    if matches.is_present("all") {
        colormap_tex::export_all()?;
        return Ok(());
    }

    let spec = matches.value_of("SPEC").unwrap();
    colormap_tex::export(spec, matches.value_of("OUTFILE"))?;
    Ok(())
}
