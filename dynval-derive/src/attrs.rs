use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, LitStr};

#[derive(Default, Clone)]
pub(crate) struct DynFieldAttr {
    pub(crate) tag: Option<LitStr>,
    pub(crate) rename: Option<LitStr>,
    pub(crate) skip: bool,
    pub(crate) omit_empty: bool,
}

impl DynFieldAttr {
    /// The annotation string handed to the runtime resolver.
    pub(crate) fn tag_value(&self) -> Option<String> {
        if let Some(tag) = &self.tag {
            return Some(tag.value());
        }
        if self.skip {
            return Some("-".to_string());
        }
        if self.rename.is_none() && !self.omit_empty {
            return None;
        }
        let mut out = self.rename.as_ref().map(LitStr::value).unwrap_or_default();
        if self.omit_empty {
            out.push_str(",omitempty");
        }
        Some(out)
    }

    /// Mirrors the runtime rule: only the exact tag `"-"` excludes a field.
    pub(crate) fn is_excluded(&self) -> bool {
        self.tag_value().as_deref() == Some("-")
    }
}

#[derive(Default, Clone)]
pub(crate) struct DynVariantAttr {
    pub(crate) rename: Option<LitStr>,
}

pub(crate) fn ensure_no_dynval_attrs(attrs: &[Attribute], ctx: &str) -> syn::Result<()> {
    for a in attrs {
        if a.path().is_ident("dynval") {
            return Err(syn::Error::new(
                a.span(),
                format!("`#[dynval(...)]` is not supported on {ctx}"),
            ));
        }
    }
    Ok(())
}

pub(crate) fn parse_dynval_field_attrs(attrs: &[Attribute]) -> syn::Result<DynFieldAttr> {
    let mut out = DynFieldAttr::default();
    for attr in attrs {
        if !attr.path().is_ident("dynval") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                if out.skip {
                    return Err(meta.error("duplicate `dynval(skip)`"));
                }
                out.skip = true;
                return Ok(());
            }
            if meta.path.is_ident("omit_empty") {
                if out.omit_empty {
                    return Err(meta.error("duplicate `dynval(omit_empty)`"));
                }
                out.omit_empty = true;
                return Ok(());
            }
            if meta.path.is_ident("rename") {
                if out.rename.is_some() {
                    return Err(meta.error("duplicate `dynval(rename=...)`"));
                }
                let lit: LitStr = meta.value()?.parse()?;
                out.rename = Some(lit);
                return Ok(());
            }
            if meta.path.is_ident("tag") {
                if out.tag.is_some() {
                    return Err(meta.error("duplicate `dynval(tag=...)`"));
                }
                let lit: LitStr = meta.value()?.parse()?;
                out.tag = Some(lit);
                return Ok(());
            }
            Err(meta.error(
                "unsupported `dynval(...)` field attribute (allowed: tag, rename, skip, omit_empty)",
            ))
        })?;
    }

    if out.tag.is_some() && (out.rename.is_some() || out.skip || out.omit_empty) {
        return Err(syn::Error::new(
            Span::call_site(),
            "`dynval(tag)` already carries the key and modifiers; it cannot be combined with `rename`, `skip` or `omit_empty`",
        ));
    }
    if out.skip && (out.rename.is_some() || out.omit_empty) {
        return Err(syn::Error::new(
            Span::call_site(),
            "`dynval(skip)` cannot be combined with `rename` or `omit_empty`",
        ));
    }
    if let Some(rename) = &out.rename {
        let value = rename.value();
        if value.is_empty() || value.contains(',') || value == "-" {
            return Err(syn::Error::new(
                rename.span(),
                "`dynval(rename)` must be a non-empty key without `,` and not `-`",
            ));
        }
    }

    Ok(out)
}

pub(crate) fn parse_dynval_variant_attrs(attrs: &[Attribute]) -> syn::Result<DynVariantAttr> {
    let mut out = DynVariantAttr::default();
    for attr in attrs {
        if !attr.path().is_ident("dynval") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if out.rename.is_some() {
                    return Err(meta.error("duplicate `dynval(rename=...)` on variant"));
                }
                let lit: LitStr = meta.value()?.parse()?;
                out.rename = Some(lit);
                return Ok(());
            }
            Err(meta.error("unsupported `dynval(...)` variant attribute (allowed: rename)"))
        })?;
    }
    Ok(out)
}
