use proc_macro2::Ident;
use quote::format_ident;
use syn::{GenericArgument, PathArguments, Type};

/// How a field's Rust type maps onto a scalar column kind.
///
/// `ScalarKind` and `Value` use the same variant names, so a single ident
/// addresses both.
pub struct ScalarMapping {
    /// The `ScalarKind`/`Value` variant for the column.
    pub kind: Ident,
    /// Whether the field is `Option<T>` and may hold NULL.
    pub optional: bool,
}

/// Resolves a field type to its scalar mapping; `Option<T>` maps to the kind of `T`.
pub fn scalar_mapping(ty: &Type) -> syn::Result<ScalarMapping> {
    if let Some(inner) = option_inner(ty) {
        let mut mapping = scalar_mapping(inner)?;
        mapping.optional = true;
        return Ok(mapping);
    }

    let name = type_ident(ty).ok_or_else(|| unsupported(ty))?;
    let kind = match name.as_str() {
        "i32" => "Integer",
        "i64" => "BigInt",
        "f32" => "Real",
        "f64" => "Double",
        "bool" => "Boolean",
        "String" => "Text",
        "NaiveDate" => "Date",
        "NaiveDateTime" => "Timestamp",
        _ => return Err(unsupported(ty)),
    };

    Ok(ScalarMapping {
        kind: format_ident!("{kind}"),
        optional: false,
    })
}

fn unsupported(ty: &Type) -> syn::Error {
    syn::Error::new_spanned(
        ty,
        "unsupported column type; expected i32, i64, f32, f64, bool, String, \
         NaiveDate, NaiveDateTime or Option of one of these",
    )
}

fn type_ident(ty: &Type) -> Option<String> {
    if let Type::Path(path) = ty {
        path.path.segments.last().map(|seg| seg.ident.to_string())
    } else {
        None
    }
}

fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else { return None };
    let seg = path.path.segments.last()?;
    if seg.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &seg.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
