use cheatset::application::{validate_file, CheatsheetSource, ExportService, LoadService};
use cheatset::cli::{
    format_builtin_list, format_entry, format_entry_pairs, format_outline, format_summary, Cli,
    Commands, DEFAULT_KEYWORD,
};
use cheatset::content;
use cheatset::error::{CheatsetError, Result};
use cheatset::infrastructure::{logging, DeclarationFormat, Settings};
use clap::Parser;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::from_env();

    let filter = if cli.verbose {
        "debug"
    } else {
        settings.log_filter.as_str()
    };
    if let Err(e) = logging::init(filter) {
        eprintln!("Warning: {:#}", e);
    }

    match cli.command {
        Some(Commands::List) => {
            let sheets = content::BUILTIN_KEYWORDS
                .iter()
                .map(|keyword| content::builtin(keyword))
                .collect::<Result<Vec<_>>>()?;
            print!("{}", format_builtin_list(&sheets));
            Ok(())
        }
        Some(Commands::Show { keyword, file }) => {
            let sheet = LoadService::load(&CheatsheetSource::resolve(&keyword, file))?;
            print!("{}", format_outline(&sheet));
            Ok(())
        }
        Some(Commands::Entries { keyword, file }) => {
            let sheet = LoadService::load(&CheatsheetSource::resolve(&keyword, file))?;
            print!("{}", format_entry_pairs(&sheet));
            Ok(())
        }
        Some(Commands::Entry {
            name,
            keyword,
            file,
        }) => {
            let sheet = LoadService::load(&CheatsheetSource::resolve(&keyword, file))?;
            let (category, entry) = sheet
                .find_entry(&name)
                .ok_or_else(|| CheatsetError::EntryNotFound(name.clone()))?;
            print!("{}", format_entry(category.id(), entry));
            Ok(())
        }
        Some(Commands::Export {
            keyword,
            file,
            format,
            output,
        }) => {
            let sheet = LoadService::load(&CheatsheetSource::resolve(&keyword, file))?;

            // Explicit flag, then the output extension, then the environment
            let format = match (format, &output) {
                (Some(f), _) => DeclarationFormat::from_str(&f)?,
                (None, Some(path)) if path.extension().is_some() => {
                    DeclarationFormat::from_path(path)
                }
                (None, _) => settings.export_format()?,
            };

            match output {
                Some(path) => {
                    ExportService::write(&sheet, format, &path)?;
                    println!("Exported {} to {}", sheet.keyword(), path.display());
                }
                None => print!("{}", ExportService::render(&sheet, format)?),
            }
            Ok(())
        }
        Some(Commands::Validate { path }) => {
            let sheet = validate_file(&path)?;
            println!("{}", format_summary(&sheet));
            Ok(())
        }
        None => {
            let keyword = cli.keyword.as_deref().unwrap_or(DEFAULT_KEYWORD);
            let sheet = LoadService::load(&CheatsheetSource::Builtin(keyword.to_string()))?;
            print!("{}", format_outline(&sheet));
            Ok(())
        }
    }
}
