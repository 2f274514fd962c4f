use std::time::Instant;

use lexconvert_rs::{Catalog, Converter, PhoneticConverter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(source), Some(dest)) = (args.next(), args.next()) else {
        eprintln!("Usage: phones2phones <source-format> <dest-format> [pronunciation...]");
        eprintln!("Formats: {}", Catalog::global()?.names().join(", "));
        std::process::exit(2);
    };
    let text = args.collect::<Vec<_>>().join(" ");
    let text = if text.is_empty() {
        "h @ l ou1".to_string()
    } else {
        text
    };

    let load_start = Instant::now();
    let catalog = Catalog::global()?;
    println!(
        "Built {} formats in {:.2?}",
        catalog.names().len(),
        load_start.elapsed()
    );

    let dest_table = catalog.format(&dest)?;
    if let Some(header) = dest_table.inline_header() {
        println!("{header}");
    }

    let mut converter = Converter::new(catalog);
    let words = converter.convert_words(&text, &source, &dest)?;
    let rendered: Vec<String> = words
        .iter()
        .map(|word| dest_table.markup_inline_word(word))
        .collect();
    println!("{}", rendered.join(" "));

    let lexicon = converter.convert_entries(&[("example".to_string(), text)], &source, &dest)?;
    for (word, pronunciation) in lexicon {
        println!("{word}: {pronunciation}");
    }

    if converter.warning_count() > 0 {
        eprintln!(
            "{} unsupported character(s) were dropped",
            converter.warning_count()
        );
    }
    Ok(())
}
