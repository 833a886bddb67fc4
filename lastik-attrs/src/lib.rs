mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `ErrorKind` trait from `lastik-error` for the given struct.
///
/// The report of the error is customized with the `error` attribute:
/// ```ignore
/// use lastik_attrs::ErrorKind;
/// use lastik_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of input", labels = ["add a term here"])]
/// pub struct UnexpectedEof;
/// ```
///
/// The following tags are available:
///
/// | Tag       | Description                                                                    |
/// | --------- | ------------------------------------------------------------------------------ |
/// | `message` | The message displayed at the top of the report.                                |
/// | `labels`  | An iterable of label texts, matched one-to-one with the spans of the error.   |
/// | `help`    | Optional help text describing what the user can do to fix the error.          |
/// | `note`    | Optional note with extra context.                                              |
///
/// Each tag accepts an expression. The expressions are evaluated inside the generated
/// `build_report` method, so `self` (and the `spans` argument) can be used in them. When `labels`
/// is omitted, every span gets an unlabeled marker.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    }.into()
}
