//! 請求書とタイムディテールの対応付け

use crate::types::{Invoice, PairedRecord, TimeDetail};

/// 対応付け結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pairing {
    pub pairs: Vec<PairedRecord>,
    /// タイムディテールが見つからなかった請求書
    pub unpaired: Vec<Invoice>,
}

/// プロジェクト番号で請求書とタイムディテールを対応付ける
///
/// 同じ番号のタイムディテールが複数あれば最後のものを採用する。
pub fn pair_records(invoices: &[Invoice], time_details: &[TimeDetail]) -> Pairing {
    let mut pairing = Pairing::default();

    for invoice in invoices {
        let matched = time_details
            .iter()
            .rev()
            .find(|td| td.project_num == invoice.project_num);

        match matched {
            Some(td) => pairing
                .pairs
                .push(PairedRecord::new(invoice.clone(), td.clone())),
            None => {
                tracing::warn!(
                    page = invoice.page_num + 1,
                    invoice = %invoice.invoice_num,
                    project = %invoice.project_num,
                    "no time detail for invoice"
                );
                pairing.unpaired.push(invoice.clone());
            }
        }
    }

    pairing
}
