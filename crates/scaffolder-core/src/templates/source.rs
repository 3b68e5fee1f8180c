//! Source templates rendered from the project name

use super::TemplateFile;

/// Stylesheet shipped with every project
pub const STYLESHEET: &str = r#"body {
    font-family: Arial, sans-serif;
}
"#;

/// HTML page template; the title is the project name
pub fn render_html(project_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{project_name}</title>
</head>
<body>

</body>
</html>
"#
    )
}

/// Entry script: pulls in the stylesheet and greets from the project
pub fn render_entry(project_name: &str) -> String {
    format!(
        r#"import './style.css';

console.log("Hello from {project_name}!");
"#
    )
}

/// Files written into `src/`, in write order
pub fn source_files(project_name: &str) -> Vec<TemplateFile> {
    vec![
        TemplateFile::new("template.html", render_html(project_name)),
        TemplateFile::new("style.css", STYLESHEET),
        TemplateFile::new("index.js", render_entry(project_name)),
    ]
}
