use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Attribute,
    DeriveInput,
    Expr,
    Ident,
    Result,
    Token,
};

/// The tags that can be passed to the `error` attribute.
#[derive(Debug, Default)]
pub struct ErrorArgs {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
    pub note: Option<Expr>,
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            let slot = match ident.to_string().as_str() {
                "message" => &mut args.message,
                "labels" => &mut args.labels,
                "help" => &mut args.help,
                "note" => &mut args.note,
                other => return Err(syn::Error::new_spanned(&ident, format!("unknown tag `{}`", other))),
            };
            if slot.is_some() {
                return Err(syn::Error::new_spanned(&ident, format!("duplicate tag `{}`", ident)));
            }
            *slot = Some(input.parse()?);

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

/// The target type to derive `ErrorKind` for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub error_args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let derive = input.parse::<DeriveInput>()?;
        let error_args = find_error_attr(&derive.attrs)
            .map(|attr| attr.parse_args::<ErrorArgs>())
            .transpose()?
            .unwrap_or_default();

        if error_args.message.is_none() {
            return Err(syn::Error::new_spanned(
                &derive.ident,
                "`ErrorKind` requires a `message` tag: #[error(message = ...)]",
            ));
        }

        Ok(ErrorKindTarget {
            name: derive.ident,
            error_args,
        })
    }
}

/// Returns the first `#[error(...)]` attribute, if any.
fn find_error_attr(attrs: &[Attribute]) -> Option<&Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident("error"))
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let message = self.error_args.message.as_ref();
        let labels = match self.error_args.labels.as_ref() {
            Some(labels) => quote! {
                #labels
                    .into_iter()
                    .map(|label| String::from(label))
                    .collect::<Vec<String>>()
            },
            None => quote! { vec![String::new(); spans.len()] },
        };
        let help = self.error_args.help.as_ref().map(|e| quote! { builder.set_help(#e); });
        let note = self.error_args.note.as_ref().map(|e| quote! { builder.set_note(#e); });

        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<'_, (&'a str, std::ops::Range<usize>)> {
                let offset = spans.first().map_or(0, |span| span.start);
                let label_texts: Vec<String> = #labels;

                #[allow(unused_mut)]
                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(#message)
                    .with_labels(
                        label_texts
                            .into_iter()
                            .zip(spans.iter())
                            .map(|(text, span)| {
                                let label = ariadne::Label::new((src_id, span.clone()))
                                    .with_color(lastik_error::EXPR);
                                if text.is_empty() {
                                    label
                                } else {
                                    label.with_message(text)
                                }
                            })
                            .collect::<Vec<_>>()
                    );

                #help
                #note
                builder.finish()
            }
        });
    }
}
