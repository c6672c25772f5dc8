use geweb_sqllog_report::{ReportConfig, run};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // 日志输出到 stderr，stdout 只保留给操作员的两行结果
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ReportConfig::geweb_default();
    match run(&config) {
        Ok(summary) => {
            println!("Arquivo gerado com sucesso: {}", summary.output_path.display());
            println!("Total de registros: {}", summary.records);
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
