use clap::{App, Arg, ArgMatches};

pub fn parse_args<'a>() -> ArgMatches<'a> {
    app().get_matches()
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("sobol")
        .version("0.1")
        .author("Antoine Büsch")
        .about("Write Sobol (or uniform random) points for plotting")
        .arg(
            Arg::with_name("samples")
                .long("samples")
                .short("n")
                .help("Number of points to write")
                .default_value("256"),
        )
        .arg(
            Arg::with_name("dimensions")
                .long("dimensions")
                .short("d")
                .help("Comma-separated list of dimensions, one coordinate each")
                .default_value("0,1"),
        )
        .arg(
            Arg::with_name("index-bits")
                .long("index-bits")
                .short("b")
                .help("Number of index bits (generator matrix columns)")
                .default_value("32"),
        )
        .arg(
            Arg::with_name("precision")
                .long("precision")
                .short("p")
                .help("Bits of precision per sample (at most 64)")
                .default_value("32"),
        )
        .arg(
            Arg::with_name("reverse")
                .long("reverse")
                .short("r")
                .help("Bit-reverse the generator matrix columns"),
        )
        .arg(
            Arg::with_name("start")
                .long("start")
                .short("s")
                .help("Index of the first point")
                .default_value("0"),
        )
        .arg(
            Arg::with_name("uniform")
                .long("uniform")
                .short("u")
                .help("Write uniform pseudo-random points instead"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .help("Stream of the uniform random generator")
                .default_value("0"),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .help("Output file name (\"-\" for stdout) [default: sobol-<N>.txt or uniform-<N>.txt]")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .help("log debug information"),
        )
        .arg(
            Arg::with_name("TABLE")
                .required(true)
                .index(1)
                .help("Direction number table, e.g. new-joe-kuo-6.21201"),
        )
}
