//! Write-side command handlers: product update and deletion.
//!
//! Failures from the store are reported to the user and returned as errors,
//! so the process exits non-zero.

use std::io::{self, BufRead, Write};

use clap::Args;
use storefront_core::ProductPatch;
use storefront_store::CatalogStore;

use crate::catalog::print_product_detail;

/// Product fields that `update` can change. Unset flags are left untouched.
#[derive(Debug, Clone, Default, Args)]
pub struct UpdateArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub detail: Option<String>,
    #[arg(long)]
    pub vendor: Option<String>,
    #[arg(long)]
    pub rating: Option<f64>,
    #[arg(long)]
    pub size: Option<String>,
    #[arg(long)]
    pub price: Option<f64>,
    /// Discount percentage, e.g. `17`
    #[arg(long)]
    pub promotion: Option<f64>,
    #[arg(long)]
    pub discount_color: Option<String>,
    #[arg(long)]
    pub category_id: Option<i64>,
    /// `true` or `false`
    #[arg(long)]
    pub in_stock: Option<bool>,
    #[arg(long)]
    pub count_sold: Option<i64>,
    #[arg(long)]
    pub group_id: Option<i64>,
    /// Image reference; repeat for several, in display order
    #[arg(long = "image")]
    pub images: Vec<String>,
}

impl UpdateArgs {
    pub(crate) fn into_patch(self) -> ProductPatch {
        ProductPatch {
            name: self.name,
            detail: self.detail,
            vendor: self.vendor,
            rating: self.rating,
            size: self.size,
            image: (!self.images.is_empty()).then_some(self.images),
            price: self.price,
            promotion_as_percentage: self.promotion,
            discount_color: self.discount_color,
            category_id: self.category_id,
            in_stock: self.in_stock,
            count_sold: self.count_sold,
            group_id: self.group_id,
        }
    }
}

/// Updates product `id` and prints the merged record.
///
/// # Errors
///
/// Returns an error if no field was given or the backend rejects the update.
pub(crate) async fn run_update(
    store: &mut CatalogStore,
    id: i64,
    args: UpdateArgs,
) -> anyhow::Result<()> {
    let patch = args.into_patch();
    if patch.is_empty() {
        anyhow::bail!("nothing to update; pass at least one field flag (see `update --help`)");
    }

    // Load the current record so the response merges over it.
    store.fetch_products().await;

    match store.update_product(id, &patch).await {
        Ok(product) => {
            println!("product {id} updated successfully");
            print_product_detail(&product);
            Ok(())
        }
        Err(e) => {
            eprintln!("failed to update product {id}: {e}");
            Err(e.into())
        }
    }
}

/// Deletes product `id`.
///
/// # Errors
///
/// Returns an error if the backend rejects the delete.
pub(crate) async fn run_delete(store: &mut CatalogStore, id: i64) -> anyhow::Result<()> {
    match store.delete_product(id).await {
        Ok(()) => {
            println!("product {id} deleted successfully");
            Ok(())
        }
        Err(e) => {
            eprintln!("failed to delete product {id}: {e}");
            Err(e.into())
        }
    }
}

/// Deletes every product after an interactive confirmation, unless `assume_yes`.
///
/// # Errors
///
/// Returns an error if reading the confirmation fails or the backend rejects
/// the delete.
pub(crate) async fn run_delete_all(store: &mut CatalogStore, assume_yes: bool) -> anyhow::Result<()> {
    if !assume_yes {
        let stdin = io::stdin();
        let confirmed = confirm(
            "Are you sure you want to delete all products? [y/N] ",
            &mut stdin.lock(),
            &mut io::stdout(),
        )?;
        if !confirmed {
            println!("aborted; no products were deleted");
            return Ok(());
        }
    }

    match store.delete_all_products().await {
        Ok(()) => {
            println!("all products deleted successfully");
            Ok(())
        }
        Err(e) => {
            eprintln!("failed to delete all products: {e}");
            Err(e.into())
        }
    }
}

/// Writes `prompt` and reads one line; only `y` or `yes` (any case) confirms.
/// End of input counts as a refusal.
pub(crate) fn confirm<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
