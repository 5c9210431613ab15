use std::future::Future;

use futures::StreamExt;
use serde_json::Value;

use super::{form_name, gender::VariantKind, model::SpriteVariant, tree};
use crate::models::remote_api::ApiVariety;

const MAX_CONCURRENT_VARIETY_FETCHES: usize = 50;

/// One alternate form with its sprite tree fetched and display name derived.
#[derive(Debug, Clone)]
pub struct ResolvedVariety {
    pub name: String,
    pub form_name: String,
    pub sprites: Value,
}

/// Fan-out/fan-in over the non-default varieties. With nothing to fetch this
/// resolves immediately; otherwise every fetch is launched independently and
/// the collect completes only once all of them have settled. A failed fetch
/// contributes no entry but still counts toward completion, and results
/// arrive in completion order.
pub async fn resolve_varieties<F, Fut>(
    base_name: &str,
    varieties: &[ApiVariety],
    fetch: F,
) -> Vec<ResolvedVariety>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Option<Value>>,
{
    let special_forms = varieties
        .iter()
        .filter(|v| !v.is_default)
        .collect::<Vec<_>>();
    if special_forms.is_empty() {
        return Vec::new();
    }

    futures::stream::iter(special_forms)
        .map(|variety| {
            let name = variety.pokemon.name.clone();
            let form_name = form_name::format_form_name(&name, base_name);
            let sprites = fetch(name.clone());
            async move {
                let sprites = sprites.await?;
                Some(ResolvedVariety {
                    name,
                    form_name,
                    sprites,
                })
            }
        })
        .buffer_unordered(MAX_CONCURRENT_VARIETY_FETCHES)
        .filter_map(|res| async move { res })
        .collect()
        .await
}

/// Representative alternate-form urls for one game slot. `path` is a dotted
/// lookup into each variety's sprite tree (empty means the root) and `filter`
/// a substring match on the form name ("" matches all). Only the default-slot
/// field is read, one url per matching variety, input order preserved.
pub fn variety_variants(
    varieties: &[ResolvedVariety],
    path: &str,
    kind: VariantKind,
    filter: &str,
) -> Vec<SpriteVariant> {
    varieties
        .iter()
        .filter(|v| v.form_name.contains(filter))
        .filter_map(|v| {
            let node = tree::descend_dotted(&v.sprites, path)?;
            let url = tree::url(node, kind.default_field())?;
            Some(SpriteVariant {
                label: v.form_name.clone(),
                url: Some(url),
            })
        })
        .collect()
}
