use color_eyre::eyre::{eyre, Result, WrapErr};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tabkit_core::{MenuConfig, MenuItemLabel, Pane, PaneContent, Theme, ThemeName};
use tabkit_ui::{Grid, MenuPosition, TabProps};

/// Configuration of the demo application
///
/// Loaded from a TOML file. Every field has a default, so a partial file (or
/// no file at all) is valid; command-line flags are applied on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Palette name
    pub theme: ThemeName,
    /// Pane shown first in uncontrolled mode
    pub default_active_index: usize,
    /// Render only the active pane
    pub render_active_only: bool,
    /// Side of a vertical menu
    pub menu_position: MenuPosition,
    /// Menu overrides, merged over the attached tabular defaults
    #[serde(deserialize_with = "menu_overrides")]
    pub menu: MenuConfig,
    /// Column shares for vertical menus
    pub grid: Grid,
    /// Panes to show, in order
    pub panes: Vec<PaneConfig>,
}

/// One pane in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneConfig {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Stable name reported with tab changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Reads `[menu]` through [`MenuConfig::from_value`] so a non-table value
/// reports a menu configuration error.
fn menu_overrides<'de, D>(deserializer: D) -> std::result::Result<MenuConfig, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    MenuConfig::from_value(value).map_err(serde::de::Error::custom)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::Dark,
            default_active_index: 0,
            render_active_only: true,
            menu_position: MenuPosition::Left,
            menu: MenuConfig::new(),
            grid: Grid::default(),
            panes: (1..=3)
                .map(|i| PaneConfig {
                    title: format!("Tab {}", i),
                    body: format!("Tab {} Content", i),
                    icon: None,
                    key: None,
                })
                .collect(),
        }
    }
}

impl Config {
    /// Loads the configuration at `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&contents).wrap_err_with(|| format!("Failed to parse config from {:?}", path))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .wrap_err_with(|| format!("Failed to create config directory: {:?}", parent))?;
            }
        }

        let contents = toml::to_string_pretty(self).wrap_err("Failed to serialize config")?;

        fs::write(path, contents).wrap_err_with(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| eyre!("Failed to find config directory"))?;

        Ok(config_dir.join("tabkit").join("config.toml"))
    }

    pub fn apply_cli(&mut self, theme: Option<ThemeName>, default_active_index: Option<usize>) {
        // Flags win over the file
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if let Some(index) = default_active_index {
            self.default_active_index = index;
        }
    }

    /// Panes described by the configuration.
    ///
    /// Each pane renders its body on demand and also carries it as shorthand
    /// content for `render_active_only = false`.
    pub fn build_panes(&self) -> Vec<Pane> {
        self.panes
            .iter()
            .map(|pane| {
                let mut label = MenuItemLabel::new(pane.title.clone());
                if let Some(icon) = &pane.icon {
                    label = label.icon(icon.clone());
                }
                if let Some(key) = &pane.key {
                    label = label.key(key.clone());
                }
                let body = pane.body.clone();
                let title = pane.title.clone();
                Pane::builder()
                    .menu_item(label)
                    .render(move || PaneContent::new(body.clone()).title(title.clone()))
                    .content(PaneContent::new(pane.body.clone()).title(pane.title.clone()))
                    .build()
            })
            .collect()
    }

    /// Uncontrolled props for the configured panes.
    pub fn tab_props(&self) -> TabProps {
        TabProps::new()
            .panes(self.build_panes())
            .default_active_index(self.default_active_index)
            .render_active_only(self.render_active_only)
            .menu(self.menu.clone())
            .grid(self.grid)
            .menu_position(self.menu_position)
            .theme(Theme::named(self.theme))
    }
}
