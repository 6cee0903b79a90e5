//! Game configuration
//!
//! Loaded once at startup and immutable for the rest of the run. Any missing or
//! out-of-range value is a startup error; nothing is re-checked mid-frame.

use arcade_engine::config::{Config, ConfigError, LegacyTokens};
use arcade_engine::render::Color;
use serde::{Deserialize, Serialize};

/// Largest vertex count an enemy may have; each vertex becomes a fragment on death
pub const MAX_ENEMY_VERTICES: u32 = 64;

/// Background image shipped with the game
pub const DEFAULT_BACKGROUND: &str = "galaxy2.jpg";

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Window settings
    pub window: WindowConfig,

    /// Score text font
    pub font: FontConfig,

    /// Optional background image path
    #[serde(default)]
    pub background: Option<String>,

    /// Player ship settings
    pub player: PlayerConfig,

    /// Enemy settings
    pub enemy: EnemyConfig,

    /// Bullet settings
    pub bullet: BulletConfig,

    /// Gameplay quirk switches
    #[serde(default)]
    pub rules: RulesConfig,
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window width in pixels
    pub width: u32,

    /// Window height in pixels
    pub height: u32,

    /// Frame-rate limit (0 = unlimited)
    pub frame_limit: u32,

    /// Windowed or fullscreen
    pub mode: WindowMode,
}

/// Window modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// User-sized window
    Windowed,
    /// Fullscreen at the desktop resolution
    Fullscreen,
}

/// Font configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontConfig {
    /// Font file path
    pub path: String,

    /// Character size in pixels
    pub size: u32,

    /// Text color
    pub color: [u8; 3],
}

/// Player configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Visual radius
    pub shape_radius: f32,

    /// Collision radius
    pub collision_radius: f32,

    /// Movement speed per frame
    pub speed: f32,

    /// Fill color
    pub fill: [u8; 3],

    /// Outline color
    pub outline: [u8; 3],

    /// Outline thickness
    pub outline_thickness: f32,

    /// Vertex count
    pub vertices: u32,
}

/// Enemy configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyConfig {
    /// Visual radius
    pub shape_radius: f32,

    /// Collision radius
    pub collision_radius: f32,

    /// Minimum spawn speed
    pub speed_min: f32,

    /// Maximum spawn speed
    pub speed_max: f32,

    /// Outline color (fill is random)
    pub outline: [u8; 3],

    /// Outline thickness
    pub outline_thickness: f32,

    /// Minimum vertex count
    pub vertices_min: u32,

    /// Maximum vertex count
    pub vertices_max: u32,

    /// Lifespan in frames; small enemies get this minus a fixed penalty
    pub lifespan: u32,

    /// Frames between enemy spawns
    pub spawn_interval: u64,
}

/// Bullet configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletConfig {
    /// Visual radius
    pub shape_radius: f32,

    /// Collision radius
    pub collision_radius: f32,

    /// Speed per frame
    pub speed: f32,

    /// Fill color
    pub fill: [u8; 3],

    /// Outline color
    pub outline: [u8; 3],

    /// Outline thickness
    pub outline_thickness: f32,

    /// Vertex count
    pub vertices: u32,

    /// Lifespan in frames
    pub lifespan: u32,
}

/// How a freshly spawned enemy picks its heading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyHeading {
    /// Velocity `(speed, speed)`: every enemy starts moving diagonally
    #[default]
    Diagonal,
    /// Velocity of magnitude `speed` at a uniformly random angle
    Random,
}

/// How fragment velocities are derived from the parent enemy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitVelocity {
    /// `(cos θ · parent.vx, sin θ · parent.vy)`
    #[default]
    PerAxis,
    /// `(cos θ, sin θ) · |parent velocity|`
    Rotated,
}

/// How large enemies react to the surface edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyBounce {
    /// Negate the axis every frame the enemy overlaps the edge
    #[default]
    Repeat,
    /// Negate only when heading outward and push the enemy back inside
    ReflectOnce,
}

/// Gameplay quirk switches; the defaults keep the classic behavior
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Fresh enemy heading
    pub enemy_heading: EnemyHeading,

    /// Fragment velocity derivation
    pub split_velocity: SplitVelocity,

    /// Edge response for large enemies
    pub enemy_bounce: EnemyBounce,
}

impl PlayerConfig {
    /// Fill color
    pub fn fill_color(&self) -> Color {
        Color::from(self.fill)
    }

    /// Outline color
    pub fn outline_color(&self) -> Color {
        Color::from(self.outline)
    }
}

impl BulletConfig {
    /// Fill color
    pub fn fill_color(&self) -> Color {
        Color::from(self.fill)
    }

    /// Outline color
    pub fn outline_color(&self) -> Color {
        Color::from(self.outline)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                width: 1280,
                height: 720,
                frame_limit: 60,
                mode: WindowMode::Windowed,
            },
            font: FontConfig {
                path: "fonts/tech.ttf".to_string(),
                size: 24,
                color: [255, 255, 255],
            },
            background: Some(DEFAULT_BACKGROUND.to_string()),
            player: PlayerConfig {
                shape_radius: 32.0,
                collision_radius: 32.0,
                speed: 5.0,
                fill: [5, 5, 5],
                outline: [255, 0, 0],
                outline_thickness: 4.0,
                vertices: 8,
            },
            enemy: EnemyConfig {
                shape_radius: 32.0,
                collision_radius: 32.0,
                speed_min: 3.0,
                speed_max: 3.0,
                outline: [255, 255, 255],
                outline_thickness: 2.0,
                vertices_min: 3,
                vertices_max: 8,
                lifespan: 90,
                spawn_interval: 60,
            },
            bullet: BulletConfig {
                shape_radius: 10.0,
                collision_radius: 10.0,
                speed: 20.0,
                fill: [255, 255, 255],
                outline: [255, 255, 255],
                outline_thickness: 2.0,
                vertices: 20,
                lifespan: 90,
            },
            rules: RulesConfig::default(),
        }
    }
}

fn require(condition: bool, message: &str) -> Result<(), ConfigError> {
    if condition {
        Ok(())
    } else {
        Err(ConfigError::Invalid(message.to_string()))
    }
}

fn finite_non_negative(values: &[(f32, &str)]) -> Result<(), ConfigError> {
    for &(value, name) in values {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "{} must be finite and non-negative",
                name
            )));
        }
    }
    Ok(())
}

impl Config for GameConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require(self.window.width > 0 && self.window.height > 0, "window size must be positive")?;
        require(self.player.vertices >= 3, "player.vertices must be at least 3")?;
        require(self.bullet.vertices >= 3, "bullet.vertices must be at least 3")?;
        require(self.enemy.vertices_min >= 3, "enemy.vertices_min must be at least 3")?;
        require(
            self.enemy.vertices_min <= self.enemy.vertices_max,
            "enemy.vertices_min must not exceed enemy.vertices_max",
        )?;
        require(
            self.enemy.vertices_max <= MAX_ENEMY_VERTICES,
            "enemy.vertices_max is too large",
        )?;
        require(
            self.enemy.speed_min <= self.enemy.speed_max,
            "enemy.speed_min must not exceed enemy.speed_max",
        )?;
        require(self.enemy.spawn_interval > 0, "enemy.spawn_interval must be positive")?;
        require(self.bullet.lifespan > 0, "bullet.lifespan must be positive")?;
        finite_non_negative(&[
            (self.player.shape_radius, "player.shape_radius"),
            (self.player.collision_radius, "player.collision_radius"),
            (self.player.speed, "player.speed"),
            (self.player.outline_thickness, "player.outline_thickness"),
            (self.enemy.shape_radius, "enemy.shape_radius"),
            (self.enemy.collision_radius, "enemy.collision_radius"),
            (self.enemy.speed_min, "enemy.speed_min"),
            (self.enemy.speed_max, "enemy.speed_max"),
            (self.enemy.outline_thickness, "enemy.outline_thickness"),
            (self.bullet.shape_radius, "bullet.shape_radius"),
            (self.bullet.collision_radius, "bullet.collision_radius"),
            (self.bullet.speed, "bullet.speed"),
            (self.bullet.outline_thickness, "bullet.outline_thickness"),
        ])
    }

    fn from_legacy_str(contents: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let mut seen = [false; 5];
        let mut tokens = LegacyTokens::new(contents);

        while let Some(section) = tokens.next_section() {
            match section {
                "Window" => {
                    let window = &mut config.window;
                    window.width = tokens.value("width")?;
                    window.height = tokens.value("height")?;
                    window.frame_limit = tokens.value("frame_limit")?;
                    window.mode = match tokens.value::<u32>("mode")? {
                        0 => WindowMode::Windowed,
                        1 => WindowMode::Fullscreen,
                        other => {
                            return Err(ConfigError::Parse(format!("Window: unknown mode {}", other)))
                        }
                    };
                    seen[0] = true;
                }
                "Font" => {
                    let font = &mut config.font;
                    font.path = tokens.value("path")?;
                    font.size = tokens.value("size")?;
                    font.color = tokens.rgb("color")?;
                    seen[1] = true;
                }
                "Player" => {
                    let player = &mut config.player;
                    player.shape_radius = tokens.value("shape_radius")?;
                    player.collision_radius = tokens.value("collision_radius")?;
                    player.speed = tokens.value("speed")?;
                    player.fill = tokens.rgb("fill")?;
                    player.outline = tokens.rgb("outline")?;
                    player.outline_thickness = tokens.value("outline_thickness")?;
                    player.vertices = tokens.value("vertices")?;
                    seen[2] = true;
                }
                "Enemy" => {
                    let enemy = &mut config.enemy;
                    enemy.shape_radius = tokens.value("shape_radius")?;
                    enemy.collision_radius = tokens.value("collision_radius")?;
                    enemy.speed_min = tokens.value("speed_min")?;
                    enemy.speed_max = tokens.value("speed_max")?;
                    enemy.outline = tokens.rgb("outline")?;
                    enemy.outline_thickness = tokens.value("outline_thickness")?;
                    enemy.vertices_min = tokens.value("vertices_min")?;
                    enemy.vertices_max = tokens.value("vertices_max")?;
                    enemy.lifespan = tokens.value("lifespan")?;
                    enemy.spawn_interval = tokens.value("spawn_interval")?;
                    seen[3] = true;
                }
                "Bullet" => {
                    let bullet = &mut config.bullet;
                    bullet.shape_radius = tokens.value("shape_radius")?;
                    bullet.collision_radius = tokens.value("collision_radius")?;
                    bullet.speed = tokens.value("speed")?;
                    bullet.fill = tokens.rgb("fill")?;
                    bullet.outline = tokens.rgb("outline")?;
                    bullet.outline_thickness = tokens.value("outline_thickness")?;
                    bullet.vertices = tokens.value("vertices")?;
                    bullet.lifespan = tokens.value("lifespan")?;
                    seen[4] = true;
                }
                other => log::warn!("Ignoring unknown config token {:?}", other),
            }
        }

        let names = ["Window", "Font", "Player", "Enemy", "Bullet"];
        if let Some((name, _)) = names.iter().zip(seen).find(|(_, seen)| !seen) {
            return Err(ConfigError::Parse(format!("missing {} section", name)));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_engine::config::ConfigFormat;

    const LEGACY: &str = "\
Window 800 600 30 0
Font fonts/arial.ttf 18 200 200 200
Player 20 18 4 10 20 30 255 0 0 3 6
Enemy 30 28 2 5 255 255 255 2 3 7 120 45
Bullet 8 8 15 255 255 0 255 128 0 1 12 60
";

    #[test]
    fn test_default_is_valid() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn test_legacy_format() {
        let config = GameConfig::load_from_str(LEGACY, ConfigFormat::Legacy).unwrap();

        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.frame_limit, 30);
        assert_eq!(config.window.mode, WindowMode::Windowed);
        assert_eq!(config.font.path, "fonts/arial.ttf");
        assert_eq!(config.font.color, [200, 200, 200]);
        assert_eq!(config.player.collision_radius, 18.0);
        assert_eq!(config.player.fill, [10, 20, 30]);
        assert_eq!(config.player.vertices, 6);
        assert_eq!(config.enemy.speed_max, 5.0);
        assert_eq!(config.enemy.vertices_max, 7);
        assert_eq!(config.enemy.lifespan, 120);
        assert_eq!(config.enemy.spawn_interval, 45);
        assert_eq!(config.bullet.outline, [255, 128, 0]);
        assert_eq!(config.bullet.lifespan, 60);
        assert_eq!(config.rules, RulesConfig::default());
    }

    #[test]
    fn test_legacy_missing_section_is_fatal() {
        let without_bullet: String = LEGACY.lines().take(4).collect::<Vec<_>>().join("\n");
        let err = GameConfig::load_from_str(&without_bullet, ConfigFormat::Legacy).unwrap_err();
        assert!(err.to_string().contains("missing Bullet section"));
    }

    #[test]
    fn test_legacy_truncated_section_is_fatal() {
        let err = GameConfig::load_from_str("Window 800 600", ConfigFormat::Legacy).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_toml_with_rules() {
        let mut config = GameConfig::default();
        config.rules.enemy_bounce = EnemyBounce::ReflectOnce;
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("enemy_bounce = \"reflect_once\""));

        let parsed = GameConfig::load_from_str(&text, ConfigFormat::Toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_rules_default_when_omitted() {
        let mut value = toml::Value::try_from(GameConfig::default()).unwrap();
        value.as_table_mut().unwrap().remove("rules");
        let parsed = GameConfig::load_from_str(&toml::to_string(&value).unwrap(), ConfigFormat::Toml).unwrap();
        assert_eq!(parsed.rules, RulesConfig::default());
    }

    #[test]
    fn test_missing_field_is_fatal() {
        let mut value = toml::Value::try_from(GameConfig::default()).unwrap();
        value["enemy"].as_table_mut().unwrap().remove("lifespan");
        let result = GameConfig::load_from_str(&toml::to_string(&value).unwrap(), ConfigFormat::Toml);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_ranges() {
        let mut config = GameConfig::default();
        config.enemy.vertices_min = 9;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = GameConfig::default();
        config.enemy.speed_min = 10.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.window.width = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.bullet.speed = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.enemy.vertices_max = u32::MAX;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_infinite_speed_rejected() {
        let mut config = GameConfig::default();
        config.enemy.speed_max = f32::INFINITY;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("enemy.speed_max"));

        let mut config = GameConfig::default();
        config.player.collision_radius = f32::INFINITY;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_legacy_inf_token_rejected() {
        let text = LEGACY.replace("Enemy 30 28 2 5", "Enemy 30 28 2 inf");
        let result = GameConfig::load_from_str(&text, ConfigFormat::Legacy);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_ron_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.ron");
        GameConfig::default().save_to_file(&path).unwrap();
        assert_eq!(GameConfig::load_from_file(&path).unwrap(), GameConfig::default());
    }
}
