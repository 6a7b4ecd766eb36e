//! Startup entry file formats.

use std::path::{Path, PathBuf};

const APP_NAME: &str = "Startup App Launcher";
const LAUNCH_AGENT_LABEL: &str = "io.github.startup-app-launcher";

/// Kind of per-user startup entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFormat {
    /// Batch file in the Windows Startup folder.
    WindowsBatch,
    /// macOS LaunchAgent property list.
    LaunchAgent,
    /// freedesktop.org autostart desktop entry.
    XdgDesktop,
}

impl EntryFormat {
    /// The format used on the current platform.
    pub fn native() -> Self {
        if cfg!(windows) {
            Self::WindowsBatch
        } else if cfg!(target_os = "macos") {
            Self::LaunchAgent
        } else {
            Self::XdgDesktop
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::WindowsBatch => "startup_apps_launcher.bat",
            Self::LaunchAgent => "io.github.startup-app-launcher.plist",
            Self::XdgDesktop => "startup-app-launcher.desktop",
        }
    }

    /// Per-user directory the OS scans at login.
    pub fn default_dir(&self) -> Option<PathBuf> {
        match self {
            Self::WindowsBatch => dirs::config_dir().map(|appdata| {
                appdata
                    .join("Microsoft")
                    .join("Windows")
                    .join("Start Menu")
                    .join("Programs")
                    .join("Startup")
            }),
            Self::LaunchAgent => dirs::home_dir().map(|home| home.join("Library").join("LaunchAgents")),
            Self::XdgDesktop => dirs::config_dir().map(|config| config.join("autostart")),
        }
    }

    /// File content that starts `executable`.
    pub fn render(&self, executable: &Path) -> String {
        let exe = executable.display().to_string();
        let working_dir = executable
            .parent()
            .map(|p| p.display().to_string())
            .filter(|p| !p.is_empty());

        match self {
            Self::WindowsBatch => {
                let mut out = String::from("@echo off\r\n");
                if let Some(dir) = working_dir {
                    out.push_str(&format!("cd /d \"{}\"\r\n", dir));
                }
                out.push_str(&format!("start \"\" \"{}\"\r\n", exe));
                out
            }
            Self::LaunchAgent => {
                let mut out = String::new();
                out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
                out.push_str("<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n");
                out.push_str("<plist version=\"1.0\">\n<dict>\n");
                out.push_str(&format!("  <key>Label</key>\n  <string>{}</string>\n", LAUNCH_AGENT_LABEL));
                out.push_str("  <key>ProgramArguments</key>\n  <array>\n");
                out.push_str(&format!("    <string>{}</string>\n", xml_escape(&exe)));
                out.push_str("  </array>\n");
                if let Some(dir) = working_dir {
                    out.push_str(&format!(
                        "  <key>WorkingDirectory</key>\n  <string>{}</string>\n",
                        xml_escape(&dir)
                    ));
                }
                out.push_str("  <key>RunAtLoad</key>\n  <true/>\n");
                out.push_str("</dict>\n</plist>\n");
                out
            }
            Self::XdgDesktop => {
                let mut out = String::from("[Desktop Entry]\n");
                out.push_str("Type=Application\n");
                out.push_str(&format!("Name={}\n", APP_NAME));
                out.push_str(&format!("Exec={}\n", quote_exec(&exe)));
                if let Some(dir) = working_dir {
                    out.push_str(&format!("Path={}\n", dir));
                }
                out.push_str("Terminal=false\n");
                out.push_str("X-GNOME-Autostart-enabled=true\n");
                out
            }
        }
    }
}

/// Quote a path for a desktop entry `Exec` key.
///
/// The value is string-unescaped before the Exec quoting rules apply, so a
/// reserved character inside quotes needs a doubled backslash (`\\$`).
/// `%` starts a field code and is written as `%%`.
fn quote_exec(path: &str) -> String {
    let mut quoted = String::with_capacity(path.len() + 2);
    quoted.push('"');
    for c in path.chars() {
        match c {
            '"' | '`' | '$' | '\\' => {
                quoted.push_str("\\\\");
                quoted.push(c);
            }
            '%' => quoted.push_str("%%"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
