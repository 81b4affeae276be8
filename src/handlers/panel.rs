// src/handlers/panel.rs
use axum::response::Html;

struct Procedure {
    name: &'static str,
    route: &'static str,
    input: &'static str,
    output: &'static str,
}

const PROCEDURES: &[Procedure] = &[
    Procedure {
        name: "product.create",
        route: "POST /api/products",
        input: "{name, price, imageUrl?}",
        output: "{success, message}",
    },
    Procedure {
        name: "product.getAll",
        route: "GET /api/products",
        input: "-",
        output: "{success, products}",
    },
    Procedure {
        name: "product.getById",
        route: "GET /api/products/{id}",
        input: "-",
        output: "{success, product}",
    },
    Procedure {
        name: "product.update",
        route: "PUT /api/products/{id}",
        input: "{name?, price?, imageUrl?}",
        output: "{success, message}",
    },
    Procedure {
        name: "product.delete",
        route: "DELETE /api/products/{id}",
        input: "-",
        output: "{success, message}",
    },
    Procedure {
        name: "product.deleteAll",
        route: "DELETE /api/products?confirm=true",
        input: "-",
        output: "{success, message}",
    },
    Procedure {
        name: "order.create",
        route: "POST /api/orders",
        input: "{productId, quantity}",
        output: "{success}",
    },
    Procedure {
        name: "order.getAll",
        route: "GET /api/orders",
        input: "-",
        output: "{success, orders}",
    },
    Procedure {
        name: "order.getById",
        route: "GET /api/orders/{id}",
        input: "-",
        output: "{success, order}",
    },
    Procedure {
        name: "order.update",
        route: "PUT /api/orders/{id}",
        input: "{quantity?}",
        output: "{success, message}",
    },
    Procedure {
        name: "order.delete",
        route: "DELETE /api/orders/{id}",
        input: "-",
        output: "{success, message}",
    },
];

// GET /panel - Procedure listing for manual testing
pub async fn render_panel() -> Html<String> {
    let mut rows = String::new();
    for p in PROCEDURES {
        rows.push_str(&format!(
            "<tr><td><code>{}</code></td><td><code>{}</code></td>\
             <td><code>{}</code></td><td><code>{}</code></td></tr>\n",
            p.name, p.route, p.input, p.output
        ));
    }

    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<title>Storefront API panel</title>\n\
         <style>body{{font-family:sans-serif;margin:2rem}}\
         table{{border-collapse:collapse}}\
         td,th{{border:1px solid #ccc;padding:.4rem .8rem;text-align:left}}</style>\n\
         </head>\n<body>\n<h1>Storefront API</h1>\n\
         <p>Failures come back as <code>{{success: false, message}}</code>. \
         Uploaded images are served under <code>/uploads/</code>.</p>\n\
         <table>\n<tr><th>Procedure</th><th>Route</th><th>Input</th><th>Result</th></tr>\n\
         {rows}</table>\n</body>\n</html>\n"
    ))
}
