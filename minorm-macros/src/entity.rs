use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::{Data, DataStruct, DeriveInput, Field, Ident, LitBool, LitStr};

use crate::utils::{self, ScalarMapping};

/// One field tagged with `#[column(...)]`.
struct Column<'a> {
    field: &'a Field,
    ident: &'a Ident,
    name: String,
    nullable: bool,
    unique: bool,
    primary_key: bool,
    mapping: ScalarMapping,
}

/// Generate implementation of `Entity` trait.
pub fn entity(input: DeriveInput) -> TokenStream {
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let Data::Struct(struct_data) = &input.data else {
        panic!("Cannot derive Entity for {ident}; it can only be derived for structs");
    };

    let table = table_name(input)?;
    let columns = parse_columns(struct_data)?;
    check_single_primary_key(&columns)?;

    let column_defs = columns.iter().map(column_def);
    let to_values = columns.iter().enumerate().map(|(idx, col)| to_value(idx, col));
    let set_arms = columns.iter().map(set_arm);
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote::quote! {
        impl #impl_generics ::minorm::prelude::Entity for #ident #ty_generics #where_clause {
            fn table_name() -> &'static str {
                #table
            }

            fn columns() -> &'static [::minorm::prelude::ColumnDef] {
                &[#(#column_defs),*]
            }

            fn to_values(&self) -> Vec<(::minorm::prelude::ColumnDef, ::minorm::prelude::Value)> {
                vec![#(#to_values),*]
            }

            fn set_column(
                &mut self,
                column: &str,
                value: ::minorm::prelude::Value,
            ) -> Result<(), ::minorm::prelude::QueryError> {
                match column {
                    #(#set_arms)*
                    _ => Err(::minorm::prelude::QueryError::UnknownColumn(column.to_string())),
                }
            }
        }
    })
}

/// Reads the table name from the `#[entity(table = "...")]` attribute.
fn table_name(input: &DeriveInput) -> syn::Result<String> {
    for attr in &input.attrs {
        if !attr.path().is_ident("entity") {
            continue;
        }
        let mut table = None;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("table") {
                let lit: LitStr = meta.value()?.parse()?;
                table = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unsupported entity attribute"))
            }
        })?;
        return table
            .ok_or_else(|| syn::Error::new_spanned(attr, "missing `table` in #[entity(...)]"));
    }

    Err(syn::Error::new_spanned(
        &input.ident,
        "missing #[entity(table = \"...\")] attribute",
    ))
}

/// Collects the fields tagged with `#[column(...)]`, in declaration order.
fn parse_columns(struct_data: &DataStruct) -> syn::Result<Vec<Column<'_>>> {
    let mut columns = Vec::new();

    for field in &struct_data.fields {
        let Some(attr) = field.attrs.iter().find(|attr| attr.path().is_ident("column")) else {
            continue;
        };
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "column fields must be named"))?;

        let mut name = ident.to_string().to_lowercase();
        let mut nullable = true;
        let mut unique = false;
        let mut primary_key = false;

        // a bare `#[column]` keeps every default
        if let syn::Meta::List(_) = &attr.meta {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    name = lit.value();
                } else if meta.path.is_ident("nullable") {
                    let lit: LitBool = meta.value()?.parse()?;
                    nullable = lit.value();
                } else if meta.path.is_ident("unique") {
                    unique = true;
                } else if meta.path.is_ident("primary_key") {
                    primary_key = true;
                } else {
                    return Err(meta.error("unsupported column attribute"));
                }
                Ok(())
            })?;
        }

        let mapping = utils::scalar_mapping(&field.ty)?;
        columns.push(Column {
            field,
            ident,
            name,
            nullable,
            unique,
            primary_key,
            mapping,
        });
    }

    Ok(columns)
}

fn check_single_primary_key(columns: &[Column<'_>]) -> syn::Result<()> {
    let mut flagged = columns.iter().filter(|col| col.primary_key);
    if let (Some(_), Some(second)) = (flagged.next(), flagged.next()) {
        return Err(syn::Error::new_spanned(
            second.field,
            "duplicate primary_key column; at most one column may be flagged",
        ));
    }

    Ok(())
}

fn column_def(col: &Column<'_>) -> TokenStream2 {
    let name = &col.name;
    let kind = &col.mapping.kind;
    let nullable = col.nullable;
    let unique = col.unique;
    let primary_key = col.primary_key;

    quote::quote! {
        ::minorm::prelude::ColumnDef {
            name: #name,
            kind: ::minorm::prelude::ScalarKind::#kind,
            nullable: #nullable,
            unique: #unique,
            primary_key: #primary_key,
        }
    }
}

fn to_value(idx: usize, col: &Column<'_>) -> TokenStream2 {
    let ident = col.ident;
    let kind = &col.mapping.kind;

    let value = if col.mapping.optional {
        quote::quote! {
            match &self.#ident {
                Some(v) => ::minorm::prelude::Value::#kind(v.clone()),
                None => ::minorm::prelude::Value::Null,
            }
        }
    } else {
        quote::quote! { ::minorm::prelude::Value::#kind(self.#ident.clone()) }
    };

    quote::quote! { (Self::columns()[#idx], #value) }
}

fn set_arm(col: &Column<'_>) -> TokenStream2 {
    let ident = col.ident;
    let name = &col.name;
    let kind = &col.mapping.kind;
    let expected = col.mapping.kind.to_string();

    let null_arm = col.mapping.optional.then(|| {
        quote::quote! {
            ::minorm::prelude::Value::Null => {
                self.#ident = None;
                Ok(())
            }
        }
    });
    let assign = if col.mapping.optional {
        quote::quote! { self.#ident = Some(v); }
    } else {
        quote::quote! { self.#ident = v; }
    };

    quote::quote! {
        #name => {
            match value {
                ::minorm::prelude::Value::#kind(v) => {
                    #assign
                    Ok(())
                }
                #null_arm
                other => Err(::minorm::prelude::QueryError::TypeMismatch {
                    column: #name,
                    expected: #expected,
                    found: other.type_name(),
                }),
            }
        }
    }
}
