use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    capm completions bash > ~/.bash_completion.d/capm\n\n\
                  Generate zsh completions:\n    capm completions zsh > ~/.zfunc/_capm\n\n\
                  Generate fish completions:\n    capm completions fish > ~/.config/fish/completions/capm.fish")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
