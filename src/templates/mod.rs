// This module renders the generated GPIO configuration header. The header template is
// the fixed Renesas boilerplate: a prologue of a known number of lines (license banner,
// include guard, includes) followed by an epilogue of up to three lines. The tables are
// inserted between the two. For each device variant bucket one st_port_config_t array
// and one st_port_init_config_t descriptor pointing at it are emitted. The finished
// header is written through a temporary sibling file and renamed into place so a failed
// run never leaves a truncated header behind.

//! Header template rendering.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::{GenError, GenResult};
use crate::pipeline::OutputBucket;

/// Prologue length of the stock `header_template.h`.
pub const DEFAULT_PROLOGUE_LINES: usize = 47;

/// Lines copied after the generated tables.
pub const EPILOGUE_LINES: usize = 3;

/// Default template and output file names.
pub const TEMPLATE_FILE: &str = "header_template.h";
pub const OUTPUT_FILE: &str = "r_gpio_cfg.h";

/// Template split at its insertion point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTemplate {
    prologue: String,
    epilogue: String,
}

impl HeaderTemplate {
    /// Split `text` after `prologue_lines` lines. The epilogue is the next
    /// [`EPILOGUE_LINES`] lines, or fewer if the template ends first; anything
    /// after that is not used.
    pub fn parse(text: &str, prologue_lines: usize) -> Result<Self, String> {
        let lines: Vec<&str> = text.split_inclusive('\n').collect();
        if lines.len() < prologue_lines {
            return Err(format!(
                "expected at least {} prologue lines, found {}",
                prologue_lines,
                lines.len()
            ));
        }

        let end = (prologue_lines + EPILOGUE_LINES).min(lines.len());
        Ok(Self {
            prologue: lines[..prologue_lines].concat(),
            epilogue: lines[prologue_lines..end].concat(),
        })
    }

    pub fn load(path: &Path, prologue_lines: usize) -> GenResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
        Self::parse(&text, prologue_lines).map_err(|reason| GenError::Template {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn prologue(&self) -> &str {
        &self.prologue
    }

    pub fn epilogue(&self) -> &str {
        &self.epilogue
    }

    /// Full header text: prologue, one table per bucket, epilogue.
    pub fn render(&self, buckets: &OutputBucket) -> String {
        let mut out = String::with_capacity(self.prologue.len() + self.epilogue.len());
        out.push_str(&self.prologue);
        out.push_str(&render_tables(buckets));
        out.push_str(&self.epilogue);
        out
    }
}

/// Table declarations for every bucket, in bucket order.
pub fn render_tables(buckets: &OutputBucket) -> String {
    let mut out = String::new();
    for (variant, lines) in buckets.iter() {
        let name = variant.to_lowercase();
        out.push_str(&format!("static const st_port_config_t GPIO_SC_TABLE_{}[] =\n{{\n", name));
        for line in lines {
            out.push_str(line);
        }
        out.push_str("};\n");
        out.push_str(&format!(
            "static const st_port_init_config_t GPIO_SC_INIT_{} = {{ 0,\t{},\t&GPIO_SC_TABLE_{}[0]\t}};\n",
            name,
            lines.len(),
            name
        ));
    }
    out
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `contents` to `path` via a temporary sibling and a rename.
pub fn write_atomic(path: &Path, contents: &str) -> GenResult<()> {
    let tmp = temp_path(path);

    let result = fs::File::create(&tmp)
        .and_then(|mut f| {
            f.write_all(contents.as_bytes())?;
            f.sync_all()
        })
        .and_then(|()| fs::rename(&tmp, path));

    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(GenError::io(path, e));
    }

    log::info!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;
    use crate::core::ResolvedPin;
    use crate::pipeline::render_entry;

    const TEMPLATE: &str = "/* banner */\n#ifndef CFG_H\n#define CFG_H\n#endif\n/* end */\n\n";

    #[test]
    fn test_parse_splits_at_prologue() {
        let tpl = HeaderTemplate::parse(TEMPLATE, 2).unwrap();
        assert_eq!(tpl.prologue(), "/* banner */\n#ifndef CFG_H\n");
        assert_eq!(tpl.epilogue(), "#define CFG_H\n#endif\n/* end */\n");
    }

    #[test]
    fn test_short_template_is_rejected() {
        let err = HeaderTemplate::parse("a\nb\nc\n", 4).unwrap_err();
        assert!(err.contains("found 3"));
    }

    #[test]
    fn test_epilogue_may_end_early() {
        // The stock template ends in "/* End of File */" without a newline.
        let tpl = HeaderTemplate::parse("a\nb\n\n/* End of File */", 2).unwrap();
        assert_eq!(tpl.prologue(), "a\nb\n");
        assert_eq!(tpl.epilogue(), "\n/* End of File */");

        let tpl = HeaderTemplate::parse("a\nb\n", 2).unwrap();
        assert_eq!(tpl.epilogue(), "");
    }

    #[test]
    fn test_lines_past_epilogue_are_dropped() {
        let tpl = HeaderTemplate::parse("p\n1\n2\n3\n4\n", 1).unwrap();
        assert_eq!(tpl.epilogue(), "1\n2\n3\n");
    }

    #[test]
    fn test_render_table_block() {
        let mut buckets = OutputBucket::new();
        let line = render_entry(&ResolvedPin {
            id: "TxD3".into(),
            port: "P7_11".into(),
            alternate: 5,
            direction: Direction::Output,
        });
        buckets.push("SCF3", line);

        let expected = "static const st_port_config_t GPIO_SC_TABLE_scf3[] =\n\
{\n\
\t{P7_11,\tFUNCTION_MODE5,\tPIN_OUTPUT},\t// Pin Function : TxD3\n\
};\n\
static const st_port_init_config_t GPIO_SC_INIT_scf3 = { 0,\t1,\t&GPIO_SC_TABLE_scf3[0]\t};\n";
        assert_eq!(render_tables(&buckets), expected);
    }

    #[test]
    fn test_render_empty_bucket() {
        let buckets = OutputBucket::seeded(["RSPI0"]);
        let text = render_tables(&buckets);
        assert!(text.contains("GPIO_SC_TABLE_rspi0[] =\n{\n};\n"));
        assert!(text.contains("{ 0,\t0,\t&GPIO_SC_TABLE_rspi0[0]\t};"));
    }

    #[test]
    fn test_render_wraps_tables_in_template() {
        let tpl = HeaderTemplate::parse(TEMPLATE, 2).unwrap();
        let out = tpl.render(&OutputBucket::seeded(["SCF0"]));
        assert!(out.starts_with(tpl.prologue()));
        assert!(out.ends_with(tpl.epilogue()));
        assert!(out.contains("GPIO_SC_INIT_scf0"));
    }

    #[test]
    fn test_temp_path_is_sibling() {
        assert_eq!(
            temp_path(Path::new("scripts/r_gpio_cfg.h")),
            PathBuf::from("scripts/r_gpio_cfg.h.tmp")
        );
    }
}
