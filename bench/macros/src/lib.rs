//! `#[quick_bench]`: ignored timing tests driven by `bench::Bencher`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{FnArg, Ident, ItemFn, LitInt, Pat, ReturnType, Token, parse_macro_input};

/// `repetitions = N`, the only accepted argument.
struct BenchArgs {
    repetitions: Option<LitInt>,
}

struct BenchArg {
    key: Ident,
    value: LitInt,
}

impl Parse for BenchArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key = input.parse()?;
        input.parse::<Token![=]>()?;
        let value = input.parse()?;
        Ok(BenchArg { key, value })
    }
}

impl Parse for BenchArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut repetitions = None;
        for arg in Punctuated::<BenchArg, Token![,]>::parse_terminated(input)? {
            if arg.key != "repetitions" {
                return Err(syn::Error::new_spanned(
                    arg.key,
                    "unknown quick_bench argument, expected `repetitions`",
                ));
            }
            if arg.value.base10_parse::<usize>()? == 0 {
                return Err(syn::Error::new_spanned(
                    arg.value,
                    "repetitions must be at least 1",
                ));
            }
            if repetitions.replace(arg.value).is_some() {
                return Err(input.error("`repetitions` given twice"));
            }
        }
        Ok(BenchArgs { repetitions })
    }
}

/// The name bound to the `Bencher`: `fn name(b: Bencher)` yields `b`.
fn bencher_binding(func: &ItemFn) -> syn::Result<&Ident> {
    let sig = &func.sig;
    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(asyncness, "quick_bench cannot be async"));
    }
    if let ReturnType::Type(_, ty) = &sig.output {
        return Err(syn::Error::new_spanned(ty, "quick_bench must return ()"));
    }

    let mut inputs = sig.inputs.iter();
    let (Some(param), None) = (inputs.next(), inputs.next()) else {
        return Err(syn::Error::new_spanned(
            &sig.inputs,
            "quick_bench takes exactly one parameter: `b: Bencher`",
        ));
    };

    match param {
        FnArg::Typed(typed) => match &*typed.pat {
            Pat::Ident(pat) => Ok(&pat.ident),
            other => Err(syn::Error::new_spanned(
                other,
                "the Bencher parameter must be a plain identifier",
            )),
        },
        FnArg::Receiver(receiver) => Err(syn::Error::new_spanned(
            receiver,
            "quick_bench cannot take self",
        )),
    }
}

fn expand(args: BenchArgs, func: ItemFn) -> syn::Result<TokenStream2> {
    let binding = bencher_binding(&func)?;
    let name = &func.sig.ident;
    let label = name.to_string();
    let vis = &func.vis;
    let attrs = &func.attrs;
    let body = &func.block;

    let repetitions = match &args.repetitions {
        Some(lit) => quote! { #lit },
        None => quote! { ::bench::DEFAULT_REPETITIONS },
    };

    Ok(quote! {
        #(#attrs)*
        #[test]
        #[ignore = "benchmark; run with --ignored --release"]
        #vis fn #name() {
            let #binding = ::bench::Bencher::new(#label).with_repetitions(#repetitions);
            #body
        }
    })
}

/// Turns `fn name(b: Bencher)` into an ignored test that receives a ready `Bencher`.
///
/// ```ignore
/// #[quick_bench(repetitions = 20)]
/// fn bench_add(b: ::bench::Bencher) {
///     b.bench_labeled("scalar", || scalar_add());
///     b.bench_labeled("vector", || vector_add());
/// }
/// ```
///
/// Run with `cargo test --release -- --ignored bench_`.
#[proc_macro_attribute]
pub fn quick_bench(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as BenchArgs);
    let func = parse_macro_input!(item as ItemFn);
    expand(args, func)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
