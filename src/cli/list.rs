use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List configured packages:\n    capm list\n\n\
                  List packages from another configuration file:\n    capm -c tools.yml list")]
pub struct ListArgs {}
