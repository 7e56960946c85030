use crate::catalog::store::CatalogStore;
use crate::cli::OutputFormat;

pub fn run(store: &CatalogStore, format: OutputFormat) -> anyhow::Result<()> {
    let stats = store.stats();

    match format {
        OutputFormat::Text => println!("{stats}"),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "total": stats.total,
                "read": stats.read,
                "percent_read": stats.percent_read(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("total\tread\tpercent_read");
            match stats.percent_read() {
                Some(pct) => println!("{}\t{}\t{pct:.2}", stats.total, stats.read),
                None => println!("{}\t{}\t", stats.total, stats.read),
            }
        }
    }

    Ok(())
}
