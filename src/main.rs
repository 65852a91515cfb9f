use std::io::Read;

use clap::Parser;

use gxj::convert::{self, ConvertOptions};
use gxj::graph_doc::GraphDocument;
use gxj::gxl_parser::parse_gxl;
use gxj::gxl_writer::to_gxl;
use gxj::layout::{self, LayoutOptions};

#[derive(Parser)]
#[command(name = "gxj", about = "Convert GXL graph files to and from JSON graph documents")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    file: Option<std::path::PathBuf>,

    /// Convert a JSON graph document back to GXL
    #[arg(long, short = 'r')]
    reverse: bool,

    /// Run a force-directed layout pass before writing the output
    #[arg(long, short = 'l')]
    layout: bool,

    /// Layout iterations
    #[arg(long, default_value_t = 1000)]
    iterations: u32,

    /// Prefix prepended to explicit node labels on import
    #[arg(long, default_value = "")]
    label_prefix: String,
}

fn main() {
    let cli = Cli::parse();

    if !cli.reverse {
        if let Some(path) = &cli.file {
            let is_gxl = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("gxl"));
            if !is_gxl {
                eprintln!("ERROR: please only import *.gxl files, got {}", path.display());
                std::process::exit(1);
            }
        }
    }

    let input = match &cli.file {
        Some(path) => std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("ERROR: failed to read {}: {e}", path.display());
            std::process::exit(1);
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).unwrap_or_else(|e| {
                eprintln!("ERROR: failed to read stdin: {e}");
                std::process::exit(1);
            });
            buf
        }
    };

    match run(&cli, &input) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli, input: &str) -> Result<String, Box<dyn std::error::Error>> {
    let layout_options = LayoutOptions {
        iterations: cli.iterations,
        ..LayoutOptions::default()
    };

    if cli.reverse {
        let mut doc: GraphDocument = serde_json::from_str(input)?;
        if cli.layout {
            layout::fruchterman_reingold(&mut doc, &layout_options);
        }
        Ok(to_gxl(&doc)?)
    } else {
        let graph = parse_gxl(input)?;
        let options = ConvertOptions {
            label_prefix: cli.label_prefix.clone(),
        };
        let mut doc = convert::to_document(&graph, &options)?;
        if cli.layout {
            layout::fruchterman_reingold(&mut doc, &layout_options);
        }
        Ok(serde_json::to_string_pretty(&doc)?)
    }
}
