#[macro_use]
extern crate clap;
#[macro_use]
extern crate failure;
extern crate flexi_logger;
#[macro_use]
extern crate log;
extern crate sobol_core as sobol;

mod argparse;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use clap::ArgMatches;
use failure::Error;

use sobol::rng::Rng;
use sobol::{Generator, GeneratorMatrix, Table};

fn main() {
    let matches = argparse::parse_args();

    let level = if matches.is_present("verbose") {
        "debug"
    } else {
        "info"
    };
    flexi_logger::Logger::with_str(format!("sobol={0},sobol_core={0}", level))
        .format(flexi_logger::opt_format)
        .start()
        .unwrap_or_else(|e| panic!("Failed to initialize logger: {}", e));

    if let Err(ref e) = run(&matches) {
        println!("Application error: {}", e);
        ::std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let samples = value_t!(matches, "samples", u64)?;
    let dimensions = parse_dimensions(matches.value_of("dimensions").unwrap_or("0,1"))?;
    let uniform = matches.is_present("uniform");

    // The table is read in uniform mode too, so a bad table fails either way.
    let filename = matches.value_of("TABLE").unwrap_or_default();
    let table = sobol::load(filename)?;
    info!("Loaded {} dimensions from {}", table.len(), filename);

    let output = match matches.value_of("output") {
        Some(o) => o.to_owned(),
        None if uniform => format!("uniform-{}.txt", samples),
        None => format!("sobol-{}.txt", samples),
    };
    let mut out: Box<dyn Write> = if output == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        Box::new(BufWriter::new(File::create(&output)?))
    };

    if uniform {
        let seed = value_t!(matches, "seed", u64)?;
        write_uniform(&mut out, samples, dimensions.len(), seed)?;
    } else {
        let index_bits = value_t!(matches, "index-bits", u32)?;
        let precision = value_t!(matches, "precision", u32)?;
        let start = value_t!(matches, "start", u64)?;
        let reverse = matches.is_present("reverse");
        write_sobol(
            &mut out,
            &table,
            &dimensions,
            samples,
            start,
            index_bits,
            precision,
            reverse,
        )?;
    }
    out.flush()?;

    info!("Wrote {} points to {}", samples, output);
    Ok(())
}

fn parse_dimensions(s: &str) -> Result<Vec<usize>, Error> {
    let dims = s
        .split(',')
        .map(|d| {
            d.trim()
                .parse::<usize>()
                .map_err(|_| format_err!("Invalid dimension \"{}\"", d))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if dims.is_empty() {
        bail!("At least one dimension is required");
    }
    Ok(dims)
}

#[allow(clippy::too_many_arguments)]
fn write_sobol<W: Write>(
    out: &mut W,
    table: &Table,
    dimensions: &[usize],
    samples: u64,
    start: u64,
    index_bits: u32,
    precision: u32,
    reverse: bool,
) -> Result<(), Error> {
    let matrices = dimensions
        .iter()
        .map(|&d| sobol::matrix::<u64>(table, d, index_bits, precision, reverse))
        .collect::<Result<Vec<GeneratorMatrix<u64>>, _>>()?;
    let mut generators = matrices
        .iter()
        .map(|m| sobol::generate(m, start))
        .collect::<Result<Vec<Generator<u64>>, _>>()?;

    // The first point is the one at `start` itself; every following point is one Gray code step.
    for i in 0..samples {
        let mut line = Vec::with_capacity(generators.len());
        for (g, m) in generators.iter_mut().zip(&matrices) {
            let x = if i == 0 { g.current() } else { g.advance()? };
            line.push(m.unit_interval(x).to_string());
        }
        writeln!(out, "{}", line.join(" "))?;
    }
    Ok(())
}

fn write_uniform<W: Write>(out: &mut W, samples: u64, n_dims: usize, seed: u64) -> Result<(), Error> {
    let mut rng = Rng::with_sequence(seed);
    for _ in 0..samples {
        let line: Vec<String> = (0..n_dims).map(|_| rng.uniform_f64().to_string()).collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    Ok(())
}
