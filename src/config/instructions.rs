use std::path::Path;

pub const SUCCESS_GLYPH: &str = "✓";
pub const WARNING_GLYPH: &str = "⚠";

const RULE_WIDTH: usize = 60;

/// Closing banner telling the operator how to review and apply the result.
pub fn completion_banner(target: &Path, output: &Path, backup: &Path) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let target = target.display();
    let output = output.display();
    let backup = backup.display();

    format!(
        "\n{rule}
✅ File updated successfully!
{rule}

New file created: {output}

Next steps:
1. Review the changes in {output}
2. If everything looks good:
   - Backup: copy {target} {backup}
   - Apply: copy {output} {target}
3. Restart backend: python {target}

{rule}"
    )
}
