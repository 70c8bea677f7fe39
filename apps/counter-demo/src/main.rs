use std::io;

use anyhow::{bail, Result};
use counter_demo::{CounterApp, DemoOptions};
use tessera_ui::click;

const SIMULATED_CLICKS: [&str; 3] = ["increment", "increment", "decrement"];

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = DemoOptions::from_env();
    log::info!("console board {}x{}", options.width, options.height);

    println!("=== Tessera Console Counter ===");
    let mut app = CounterApp::new(options, io::stdout());
    let mut tree = app.render_frame()?;
    print_tree(&tree);

    for key in SIMULATED_CLICKS {
        println!();
        println!("[{key} button clicked]");
        if !click(&tree, key) {
            bail!("no click handler on '{key}'");
        }
        tree = app.render_frame()?;
        print_tree(&tree);
    }

    println!("final count: {}", app.count());
    Ok(())
}

fn print_tree(tree: &tessera_ui::Node) {
    println!();
    println!("--- UI Tree ---");
    print!("{}", tree.tree_string());
    println!("---------------");
}
