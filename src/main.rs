use asset_match::{cli, config, export, records, reference};
use asset_match_common::{pair_records, search_with_progress};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("asset_match=debug,asset_match_common=debug,info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Pair { invoices, time_details, output } => {
            println!("📑 asset-match - 対応付け\n");

            println!("[1/2] レコードを読み込み中...");
            let invoices = records::load_invoices(&invoices)?;
            let time_details = records::load_time_details(&time_details)?;
            println!("✔ 請求書 {}件 / タイムディテール {}件\n", invoices.len(), time_details.len());

            println!("[2/2] 対応付け中...");
            let pairing = pair_records(&invoices, &time_details);
            for inv in &pairing.unpaired {
                println!("⚠ タイムディテールが見つかりません");
                println!(
                    "  Page {}: Invoice {} for {} {}",
                    inv.page_num + 1,
                    inv.invoice_num,
                    inv.project_num,
                    inv.project_name
                );
            }
            records::save_pairs(&output, &pairing.pairs)?;
            println!("✔ {}ペアを保存: {}", pairing.pairs.len(), output.display());

            println!("\n✅ 対応付け完了");
        }

        Commands::Match { pairs, assets, min, max, step, workers, scorer, format, output } => {
            println!("🏢 asset-match - 物件名照合\n");

            let sweep = config.sweep_config(min, max, step, workers)?;
            let assets = assets.unwrap_or_else(|| config.asset_assignments.clone());

            // 1. 読み込み
            println!("[1/3] ペアと物件名マスタを読み込み中...");
            let pairs = records::load_pairs(&pairs)?;
            let table = reference::load_reference_table(&assets)?;
            println!(
                "✔ {}ペア / マスタ {}シート {}行\n",
                pairs.len(),
                table.sheets.len(),
                table.data_row_count()
            );

            // 2. 閾値スイープ
            let thresholds = sweep.thresholds();
            println!(
                "[2/3] 閾値スイープ中... ({}〜{}, {}刻み, {}スレッド, {})",
                sweep.threshold_min, sweep.threshold_max, sweep.threshold_step, sweep.worker_count, scorer
            );
            let progress = ProgressBar::new(thresholds.len() as u64);
            progress.set_style(
                ProgressStyle::with_template("  {bar:40} {pos}/{len} 閾値")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            let scorer = scorer.scorer();
            let result = search_with_progress(&table, &pairs, &sweep, scorer.as_ref(), |_| {
                progress.inc(1)
            })?;
            progress.finish_and_clear();

            let Some(result) = result else {
                println!("⚠ 有効な閾値が見つかりませんでした（ペアが空、または完全一致なし）");
                return Ok(());
            };

            if cli.verbose {
                for summary in &result.summaries {
                    match summary.full_match_count {
                        Some(count) => println!("  閾値 {:>3}: 完全一致 {}件", summary.threshold, count),
                        None => println!("  閾値 {:>3}: -", summary.threshold),
                    }
                }
            }
            println!("✔ Best ratio: {}\n", result.best_threshold);
            println!("{}\n", result.report());

            if cli.verbose {
                // 要確認のペアのみ表示
                for m in result.outcome.matches.iter().filter(|m| m.classification.candidate_count() != 1) {
                    println!(
                        "  {} {}: {} ({}件)",
                        m.pair.invoice.project_num,
                        m.pair.project_name(),
                        m.classification.kind(),
                        m.classification.candidate_count()
                    );
                }
            }

            // 3. 出力
            if let Some(output) = output {
                println!("[3/3] 照合結果を出力中...");
                export::export_results(&result.outcome, &format, &output, "match_results")?;
            } else {
                println!("[3/3] 出力先が未指定のためスキップ");
            }

            println!("\n✅ 照合完了");
        }

        Commands::Config { threshold_min, threshold_max, threshold_step, workers, assets, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(v) = threshold_min {
                config.threshold_min = v;
                changed = true;
            }
            if let Some(v) = threshold_max {
                config.threshold_max = v;
                changed = true;
            }
            if let Some(v) = threshold_step {
                config.threshold_step = v;
                changed = true;
            }
            if let Some(v) = workers {
                config.worker_count = v;
                changed = true;
            }
            if let Some(path) = assets {
                config.asset_assignments = path;
                changed = true;
            }

            if changed {
                config.sweep_config(None, None, None, None)?;
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  閾値: {}〜{} ({}刻み)", config.threshold_min, config.threshold_max, config.threshold_step);
                println!("  ワーカー数: {}", config.worker_count);
                println!("  物件名マスタ: {}", config.asset_assignments.display());
            }
        }
    }

    Ok(())
}
