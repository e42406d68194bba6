use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[path = "src/theme_rules.rs"]
mod theme_rules;

#[derive(Deserialize)]
struct ThemeFile {
    name: String,
    background_image: Option<String>,
    primary_color: String,
    text_color: String,
    font_family: Option<String>,
    hour_hand_image: Option<String>,
    minute_hand_image: Option<String>,
    hand_image_angle_adjustment: Option<f64>,
}

const DEFAULT_HAND_IMAGE_ANGLE_ADJUSTMENT: f64 = -142.0;

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=CLOCK_THEME_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let theme_path = resolve_theme_path(workspace_root);
    println!("cargo:rerun-if-changed={}", theme_path.display());

    let contents = fs::read_to_string(&theme_path).unwrap_or_else(|err| {
        panic!("failed to read clock theme at {}: {err}", theme_path.display())
    });

    let theme: ThemeFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!("failed to parse clock theme at {}: {err}", theme_path.display())
    });

    validate_theme(&theme, &theme_path, workspace_root);

    let adjustment = theme
        .hand_image_angle_adjustment
        .unwrap_or(DEFAULT_HAND_IMAGE_ANGLE_ADJUSTMENT);
    if !adjustment.is_finite() {
        panic!(
            "hand_image_angle_adjustment must be finite in {}",
            theme_path.display()
        );
    }

    let mut output = String::new();
    writeln!(&mut output, "pub const BUILTIN_THEME: BuiltinTheme = BuiltinTheme {{").unwrap();
    writeln!(&mut output, "    name: {},", rust_string(&theme.name)).unwrap();
    writeln!(
        &mut output,
        "    background_image: {},",
        rust_option(theme.background_image.as_deref())
    )
    .unwrap();
    writeln!(&mut output, "    primary_color: {},", rust_string(&theme.primary_color)).unwrap();
    writeln!(&mut output, "    text_color: {},", rust_string(&theme.text_color)).unwrap();
    writeln!(
        &mut output,
        "    font_family: {},",
        rust_string(theme.font_family.as_deref().unwrap_or(""))
    )
    .unwrap();
    writeln!(
        &mut output,
        "    hour_hand_image: {},",
        rust_option(theme.hour_hand_image.as_deref())
    )
    .unwrap();
    writeln!(
        &mut output,
        "    minute_hand_image: {},",
        rust_option(theme.minute_hand_image.as_deref())
    )
    .unwrap();
    writeln!(
        &mut output,
        "    hand_image_angle_adjustment: {:?},",
        adjustment
    )
    .unwrap();
    writeln!(&mut output, "}};").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("builtin_theme.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_theme_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("CLOCK_THEME_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("theme/clock.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn rust_option(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => format!("Some({})", rust_string(value)),
        None => "None".to_string(),
    }
}

fn validate_theme(theme: &ThemeFile, theme_path: &Path, workspace_root: &Path) {
    check_rule(theme_rules::check_name(&theme.name), theme_path);
    check_rule(
        theme_rules::check_color("primary_color", &theme.primary_color),
        theme_path,
    );
    check_rule(
        theme_rules::check_color("text_color", &theme.text_color),
        theme_path,
    );
    check_rule(
        theme_rules::check_font(theme.font_family.as_deref().unwrap_or("")),
        theme_path,
    );
    let images = [
        ("background_image", theme.background_image.as_deref()),
        ("hour_hand_image", theme.hour_hand_image.as_deref()),
        ("minute_hand_image", theme.minute_hand_image.as_deref()),
    ];
    for (field, src) in images {
        let Some(src) = src.map(str::trim).filter(|src| !src.is_empty()) else {
            continue;
        };
        check_rule(theme_rules::check_image(field, src), theme_path);
        if src.starts_with("http://") || src.starts_with("https://") {
            continue;
        }
        let local = workspace_root.join(src.trim_start_matches('/'));
        println!("cargo:rerun-if-changed={}", local.display());
        if !local.exists() {
            panic!(
                "{field} '{src}' resolved to missing file {} (from {})",
                local.display(),
                theme_path.display()
            );
        }
    }
}

fn check_rule(result: Result<(), String>, theme_path: &Path) {
    if let Err(err) = result {
        panic!("{err} in {}", theme_path.display());
    }
}
