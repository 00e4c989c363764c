use clap::{self, Arg, Command};

fn add_input(app: Command<'static>) -> Command<'static> {
    app.arg(
        Arg::new("input")
            .help("Histogram file")
            .long_help(
                "Text file with one `value count` pair per line, as dumped by the histogram tools.  \
                 Put `--` before a path starting with a dash",
            )
            .value_name("histogram_file.txt")
            .required(true),
    )
    .arg(
        Arg::new("title")
            .help("Title of the chart")
            .long_help("Text shown after \"Audio Histogram - \" on top of the chart")
            .allow_hyphen_values(true)
            .required(true),
    )
}

fn add_bar_width(app: Command<'static>) -> Command<'static> {
    const LONG_BAR_WIDTH_HELP: &str = "\
How wide bars are drawn.

With `adaptive`, every bar covers 80% of the smallest gap between two sample
values (1000 when there are less than two values) and the x axis is padded
with 10% of the data extent plus 1000 on both sides.

With `fixed`, bars are 1 unit wide and the x axis fits the data.
";
    app.arg(
        Arg::new("bar-width")
            .long("bar-width")
            .short('b')
            .help("Policy for the width of the bars")
            .long_help(LONG_BAR_WIDTH_HELP)
            .value_parser(["adaptive", "fixed"])
            .default_value("adaptive")
            .takes_value(true),
    )
}

fn add_dpi(app: Command<'static>) -> Command<'static> {
    app.arg(
        Arg::new("dpi")
            .long("dpi")
            .short('d')
            .help("Resolution of the 12x6 inches image")
            .value_parser(clap::value_parser!(u32))
            .default_value("300")
            .takes_value(true),
    )
}

pub fn get_app() -> Command<'static> {
    let app = Command::new("histplot")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .max_term_width(100)
        .arg(
            Arg::new("color")
                .short('c')
                .long("color")
                .help("Use colors in the output")
                .value_parser(["auto", "no", "yes"])
                .default_value("auto")
                .takes_value(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Be more verbose")
                .takes_value(false),
        );
    add_input(add_dpi(add_bar_width(app)))
}
