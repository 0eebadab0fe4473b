use anyhow::Result;
use promptline::{
    ExhaustedInput, PromptConfig,
    utils::{Menu, Terminal},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const OPTIONS: [&str; 3] = ["Introduce yourself", "Pick a lucky number", "Answer a question"];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("------------------------------------------------------------");
    println!("                        PROMPTLINE                          ");
    println!("                 VERSION:   {}                           ", env!("CARGO_PKG_VERSION"));
    println!("------------------------------------------------------------");

    // A piped-in script should end the demo when it runs out, not spin.
    let mut terminal = Terminal::stdio()
        .with_config(PromptConfig::default().exhausted_input(ExhaustedInput::Fail));

    let menu = Menu::new(&OPTIONS, true)?;

    loop {
        let selection = terminal.prompt_for_menu(&menu)?;
        let Some(choice) = menu.option(selection) else {
            break;
        };
        info!(selection, choice, "menu selection");

        match selection {
            1 => {
                let name = terminal.prompt_for_string("What is your name?")?;
                println!("Nice to meet you, {}!", name.trim());
            }
            2 => {
                let n: i32 = terminal.prompt_for_int("Pick a number from 1 to 99:", 1, 99)?;
                println!("Your lucky number is {}.", n);
            }
            _ => {
                let likes = terminal.prompt_for_boolean("You like Rust? (yes/no)", "yes", "no")?;
                println!("{}", if likes { "Good taste." } else { "Give it time." });
            }
        }
    }

    println!("Bye!");
    Ok(())
}
