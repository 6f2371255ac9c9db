use clap::{Parser, Subcommand};
use foodscan_common::{Allergy, Choice, DietaryPreference, HealthGoal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "foodscan")]
#[command(about = "Personalized Food Insight Scanner - scan, understand, eat smart", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 保存ファイル（省略時: FOODSCAN_STORE → 設定 → ~/.config/foodscan/storage.json）
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// プロフィールの作成・表示
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// バーコードを手入力して解析へ進む
    Scan {
        /// 商品バーコード
        barcode: String,
    },

    /// 最後にスキャンした商品の解析結果を表示
    Results,

    /// 食事ログ
    Log {
        #[command(subcommand)]
        action: LogCommand,
    },

    /// 設定を表示/編集
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// プロフィールを保存（--name 省略時は対話入力、他の指定は初期値になる）
    Set {
        #[arg(short, long)]
        name: Option<String>,

        /// アレルギーID（複数指定可）: nuts, dairy, gluten, eggs, soy, shellfish, fish, sesame
        #[arg(short, long = "allergy", value_parser = parse_allergy)]
        allergies: Vec<String>,

        /// 健康目標: weight-loss, muscle-gain, maintenance, heart-health, diabetes
        #[arg(short, long, value_parser = parse_choice::<HealthGoal>)]
        goal: Option<HealthGoal>,

        /// 食事スタイル: omnivore, vegetarian, vegan, keto, paleo, mediterranean
        #[arg(short, long, value_parser = parse_choice::<DietaryPreference>)]
        diet: Option<DietaryPreference>,
    },

    /// 保存済みプロフィールを表示
    Show,
}

#[derive(Subcommand)]
pub enum LogCommand {
    /// 現在の解析結果をログに追加
    Save,

    /// ログ一覧
    List,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// 設定を表示
    Show,

    /// 商品照会の待ち時間（ミリ秒）を設定
    SetDelay {
        ms: u64,
    },
}

pub fn parse_choice<T: Choice>(s: &str) -> Result<T, String> {
    T::from_id(&s.to_lowercase()).ok_or_else(|| {
        let ids = T::ALL.iter().map(|c| c.id()).collect::<Vec<_>>();
        format!("Unknown value: {}. Use one of: {}", s, ids.join(", "))
    })
}

pub fn parse_allergy(s: &str) -> Result<String, String> {
    let id = s.to_lowercase();
    match Allergy::find(&id) {
        Some(allergy) => Ok(allergy.id.to_string()),
        None => Err(format!("Unknown allergy: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice::<HealthGoal>("heart-health"), Ok(HealthGoal::HeartHealth));
        assert_eq!(parse_choice::<DietaryPreference>("Vegan"), Ok(DietaryPreference::Vegan));
        assert!(parse_choice::<HealthGoal>("bulk").unwrap_err().contains("weight-loss"));
    }

    #[test]
    fn test_parse_allergy() {
        assert_eq!(parse_allergy("Gluten").unwrap(), "gluten");
        assert!(parse_allergy("pollen").is_err());
    }

    #[test]
    fn test_profile_set_args() {
        let cli = Cli::try_parse_from([
            "foodscan", "profile", "set", "--name", "Ada", "-a", "nuts", "-a", "soy", "--goal", "diabetes",
        ])
        .unwrap();
        match cli.command {
            Commands::Profile {
                action: ProfileCommand::Set { name, allergies, goal, diet },
            } => {
                assert_eq!(name.as_deref(), Some("Ada"));
                assert_eq!(allergies, vec!["nuts", "soy"]);
                assert_eq!(goal, Some(HealthGoal::Diabetes));
                assert_eq!(diet, None);
            }
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn test_profile_set_flags_without_name() {
        let cli = Cli::try_parse_from(["foodscan", "profile", "set", "--allergy", "gluten", "--goal", "diabetes"])
            .unwrap();
        match cli.command {
            Commands::Profile {
                action: ProfileCommand::Set { name, allergies, goal, diet },
            } => {
                assert_eq!(name, None);
                assert_eq!(allergies, vec!["gluten"]);
                assert_eq!(goal, Some(HealthGoal::Diabetes));
                assert_eq!(diet, None);
            }
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["foodscan", "scan", "123", "--store", "x.json", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.store, Some(PathBuf::from("x.json")));
        assert!(matches!(cli.command, Commands::Scan { barcode } if barcode == "123"));
    }
}
