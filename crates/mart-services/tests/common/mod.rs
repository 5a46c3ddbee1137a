//! In-memory backends built on `MockTransport`.

#![allow(dead_code)]

use mart_commerce::cart::CartItem;
use mart_commerce::{GoodsId, Price, SkuId};
use mart_data::{FetchError, Method, MockTransport, RequestSpec};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

pub type CartLines = Arc<Mutex<Vec<CartItem>>>;

fn field<'a>(spec: &'a RequestSpec, key: &str) -> Result<&'a Value, FetchError> {
    spec.field(key)
        .ok_or_else(|| FetchError::InvalidRequest(format!("missing {key}")))
}

fn bad_request(message: &str) -> FetchError {
    FetchError::Api {
        status: 400,
        code: "400".into(),
        message: message.into(),
    }
}

/// A cart line for `sku` with unit price 10.00.
pub fn line(sku: &str, count: i64) -> CartItem {
    CartItem {
        id: GoodsId::new(format!("goods-{sku}")),
        sku_id: SkuId::new(sku),
        name: format!("Item {sku}"),
        attrs_text: String::new(),
        picture: format!("{sku}.png"),
        price: Price::from_fen(1000),
        now_price: Price::from_fen(1000),
        selected: true,
        count,
        stock: 100,
        discount: None,
        is_effective: true,
        is_collect: false,
    }
}

/// A cart backend that merges adds by SKU, the way the real one does.
///
/// `skus` lists the SKUs that can be patched individually.
pub fn cart_backend(skus: &[&str]) -> (Arc<MockTransport>, CartLines) {
    let lines: CartLines = Arc::new(Mutex::new(Vec::new()));

    let add = lines.clone();
    let list = lines.clone();
    let remove = lines.clone();
    let select_all = lines.clone();

    let mut mock = MockTransport::new()
        .on(Method::Post, "/member/cart", move |spec| {
            let sku = field(spec, "skuId")?.as_str().unwrap_or_default().to_string();
            let count = field(spec, "count")?.as_i64().unwrap_or_default();
            let mut lines = add.lock().unwrap();
            match lines.iter_mut().find(|l| l.sku_id.as_str() == sku) {
                Some(existing) => existing.count += count,
                None => lines.push(line(&sku, count)),
            }
            Ok(Value::Null)
        })
        .on(Method::Get, "/member/cart", move |_| {
            Ok(serde_json::to_value(&*list.lock().unwrap()).unwrap())
        })
        .on(Method::Delete, "/member/cart", move |spec| {
            let ids: Vec<String> = serde_json::from_value(field(spec, "ids")?.clone())?;
            remove
                .lock()
                .unwrap()
                .retain(|l| !ids.iter().any(|id| id == l.sku_id.as_str()));
            Ok(Value::Null)
        })
        .on(Method::Put, "/member/cart/selected", move |spec| {
            let selected = field(spec, "selected")?
                .as_bool()
                .ok_or_else(|| bad_request("selected must be a boolean"))?;
            for l in select_all.lock().unwrap().iter_mut() {
                l.selected = selected;
            }
            Ok(Value::Null)
        });

    for sku in skus {
        let update = lines.clone();
        let sku = sku.to_string();
        mock = mock.on(Method::Put, format!("/member/cart/{sku}"), move |spec| {
            let mut lines = update.lock().unwrap();
            let target = lines
                .iter_mut()
                .find(|l| l.sku_id.as_str() == sku)
                .ok_or_else(|| bad_request("sku not in cart"))?;
            if let Some(selected) = spec.field("selected").and_then(Value::as_bool) {
                target.selected = selected;
            }
            if let Some(count) = spec.field("count").and_then(Value::as_i64) {
                target.count = count;
            }
            Ok(Value::Null)
        });
    }

    (Arc::new(mock), lines)
}

/// A "guess you like" backend with `pages` pages of `per_page` goods.
pub fn guess_backend(pages: u32, per_page: u32) -> Arc<MockTransport> {
    Arc::new(MockTransport::new().on(
        Method::Get,
        "/home/goods/guessLike",
        move |spec| {
            let page = spec.field("page").and_then(Value::as_u64).unwrap_or(1) as u32;
            Ok(goods_page(page, per_page, pages))
        },
    ))
}

/// Page `page` of a goods list, item IDs numbered across pages.
pub fn goods_page(page: u32, per_page: u32, pages: u32) -> Value {
    let start = (page - 1) * per_page;
    let items: Vec<Value> = (start..start + per_page)
        .map(|n| {
            json!({
                "id": format!("g{n}"),
                "name": format!("Goods {n}"),
                "picture": format!("g{n}.png"),
                "price": 9.9,
                "desc": "",
                "orderNum": n
            })
        })
        .collect();
    json!({
        "counts": pages * per_page,
        "items": items,
        "page": page,
        "pageSize": per_page,
        "pages": pages
    })
}
