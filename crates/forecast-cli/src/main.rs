//! 잔고 예측 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 합성 가계부 시계열 생성 (CSV)
//! forecast synth -f 2024-01-01 -t 2024-12-31 -o data/ledger.csv
//!
//! # 모델 학습 (CSV 또는 합성 데이터 → models/)
//! forecast train --input data/ledger.csv
//! forecast train -f 2024-01-01 -t 2024-12-31
//!
//! # 저장된 모델로 일회성 예측
//! forecast predict --balance 3200 --horizon 30
//! ```

use clap::{Parser, Subcommand};

mod commands;

use commands::predict::run_predict;
use commands::synth::run_synth;
use commands::train::run_train;

#[derive(Parser)]
#[command(name = "forecast")]
#[command(about = "잔고 예측 파이프라인 CLI - 합성 데이터 생성, 모델 학습, 예측", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로
    #[arg(short, long, default_value = "config/default.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 캘린더 규칙 기반 합성 잔고 시계열 생성
    Synth {
        /// 시작 날짜 (YYYY-MM-DD)
        #[arg(short = 'f', long)]
        from: String,

        /// 종료 날짜 (YYYY-MM-DD)
        #[arg(short, long)]
        to: String,

        /// 출력 CSV 경로
        #[arg(short, long, default_value = "data/ledger.csv")]
        output: String,

        /// 시작 잔고 (설정 파일 값 대체)
        #[arg(long)]
        start_balance: Option<String>,

        /// 난수 시드 (설정 파일 값 대체)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// 모델 학습 및 아티팩트 저장
    Train {
        /// 입력 CSV 경로 (생략 시 합성 데이터로 학습)
        #[arg(short, long)]
        input: Option<String>,

        /// 합성 데이터 시작 날짜 (YYYY-MM-DD, --input 생략 시)
        #[arg(short = 'f', long, default_value = "2024-01-01")]
        from: String,

        /// 합성 데이터 종료 날짜 (YYYY-MM-DD, --input 생략 시)
        #[arg(short, long, default_value = "2024-12-31")]
        to: String,

        /// 합성 데이터 난수 시드 (--input 생략 시, 설정 파일 값 대체)
        #[arg(long)]
        seed: Option<u64>,

        /// 아티팩트 출력 디렉토리 (설정 파일 값 대체)
        #[arg(short, long)]
        output_dir: Option<String>,

        /// 트리 개수 (설정 파일 값 대체)
        #[arg(long)]
        trees: Option<usize>,

        /// 예측 horizon 집합, 쉼표 구분 (예: 7,30,90)
        #[arg(long)]
        horizons: Option<String>,

        /// 홀드아웃 R² 최소 기준 (미달 시 아티팩트 저장 거부)
        #[arg(long)]
        min_r2: Option<f64>,
    },

    /// 저장된 아티팩트로 일회성 예측
    Predict {
        /// 현재 잔고
        #[arg(short, long)]
        balance: f64,

        /// 예측 horizon (일 단위)
        #[arg(long)]
        horizon: usize,

        /// 기준 날짜 (YYYY-MM-DD, 생략 시 오늘)
        #[arg(short, long)]
        date: Option<String>,

        /// 아티팩트 디렉토리 (설정 파일 값 대체)
        #[arg(long)]
        model_dir: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = if std::path::Path::new(&cli.config).exists() {
        forecast_core::config::AppConfig::load(&cli.config)?
    } else {
        tracing::warn!(path = %cli.config, "Config file not found, using built-in defaults");
        forecast_core::config::AppConfig::default()
    };

    match cli.command {
        Commands::Synth {
            from,
            to,
            output,
            start_balance,
            seed,
        } => run_synth(&config, &from, &to, &output, start_balance.as_deref(), seed),
        Commands::Train {
            input,
            from,
            to,
            seed,
            output_dir,
            trees,
            horizons,
            min_r2,
        } => {
            let overrides = commands::train::TrainOverrides {
                seed,
                output_dir,
                trees,
                horizons,
                min_r2,
            };
            run_train(&config, input.as_deref(), &from, &to, overrides)
        }
        Commands::Predict {
            balance,
            horizon,
            date,
            model_dir,
        } => run_predict(
            &config,
            balance,
            horizon,
            date.as_deref(),
            model_dir.as_deref(),
        ),
    }
}
