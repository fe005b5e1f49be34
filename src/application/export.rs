//! Export cheatsheet use case
//!
//! Re-serializes a constructed cheatsheet into its declarative shape, which
//! is what an external docset generator consumes.

use crate::domain::Cheatsheet;
use crate::error::Result;
use crate::infrastructure::{write_declaration, DeclarationFormat};
use std::path::Path;

/// Service for exporting cheatsheets
pub struct ExportService;

impl ExportService {
    /// Render the declaration text for `sheet`
    pub fn render(sheet: &Cheatsheet, format: DeclarationFormat) -> Result<String> {
        format.render(&sheet.to_declaration())
    }

    /// Write the declaration for `sheet` to `path`
    pub fn write(sheet: &Cheatsheet, format: DeclarationFormat, path: &Path) -> Result<()> {
        write_declaration(path, &sheet.to_declaration(), format)?;

        tracing::info!(
            keyword = sheet.keyword(),
            path = %path.display(),
            %format,
            "exported cheatsheet"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::haddock;
    use crate::infrastructure::read_declaration;
    use tempfile::TempDir;

    #[test]
    fn test_render_toml_round_trip() {
        let sheet = haddock().unwrap();
        let text = ExportService::render(&sheet, DeclarationFormat::Toml).unwrap();

        let decl = DeclarationFormat::Toml.parse(&text).unwrap();
        assert_eq!(decl, sheet.to_declaration());
        assert_eq!(Cheatsheet::from_declaration(decl).unwrap(), sheet);
    }

    #[test]
    fn test_render_json_round_trip() {
        let sheet = haddock().unwrap();
        let text = ExportService::render(&sheet, DeclarationFormat::Json).unwrap();
        assert!(text.contains("\"docset_file_name\": \"Haddock\""));

        let decl = DeclarationFormat::Json.parse(&text).unwrap();
        assert_eq!(Cheatsheet::from_declaration(decl).unwrap(), sheet);
    }

    #[test]
    fn test_write_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("haddock.toml");
        let sheet = haddock().unwrap();

        ExportService::write(&sheet, DeclarationFormat::Toml, &path).unwrap();

        let decl = read_declaration(&path).unwrap();
        assert_eq!(decl.keyword.as_deref(), Some("haddock"));
        assert_eq!(decl.categories.len(), 15);
    }
}
