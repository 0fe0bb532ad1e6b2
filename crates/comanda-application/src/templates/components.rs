//! Reusable markup fragments: product cards, cart lines, order rows.

use crate::fmt;
use crate::templates::escape_html;
use comanda_core::cart::DerivedCartLine;
use comanda_core::menu::MenuItem;
use comanda_core::order::{Order, OrderStatus};

/// A catalog entry card with its add-to-cart hook.
pub fn product_card(product: &MenuItem) -> String {
    format!(
        r##"<div class="product">
  <div class="img"><span class="badge">{category}</span></div>
  <div class="body">
    <h3>
      <span>{name}</span>
      <span class="price">{price}</span>
    </h3>
    <p>Freshly made. Add to your order.</p>
  </div>
  <div class="footer">
    <button class="btn small" data-add="{id}">Add to Cart</button>
  </div>
</div>"##,
        category = escape_html(&product.category),
        name = escape_html(&product.name),
        price = fmt::money(product.price),
        id = product.id,
    )
}

/// A derived cart line with its quantity stepper and remove hook.
pub fn cart_item(line: &DerivedCartLine) -> String {
    format!(
        r##"<div class="line">
  <div>
    <div style="font-weight:900">{name}</div>
    <div class="mini">{unit} x {qty} = {total}</div>
  </div>
  <div class="qty">
    <div class="stepper">
      <button data-dec="{id}">-</button>
      <span>{qty}</span>
      <button data-inc="{id}">+</button>
    </div>
    <button class="danger" data-rm="{id}">Remove</button>
  </div>
</div>"##,
        name = escape_html(&line.name),
        unit = fmt::money(line.unit_price),
        qty = line.qty,
        total = fmt::money(line.line_total),
        id = line.product_id,
    )
}

/// A status chip; lowercase value doubles as the css class.
pub fn status_tag(status: OrderStatus) -> String {
    format!(r##"<span class="tag {status}">{status}</span>"##)
}

/// One order table row; admins get the detail hook.
pub fn order_row(order: &Order, is_admin: bool) -> String {
    let detail = if is_admin {
        format!(
            r##"<button class="btn small secondary" data-open="{}">Details</button>"##,
            escape_html(&order.id)
        )
    } else {
        String::new()
    };
    format!(
        r##"<tr>
  <td>{id}</td>
  <td>{date}</td>
  <td>{status}</td>
  <td>{total}</td>
  <td>{detail}</td>
</tr>"##,
        id = escape_html(&order.id),
        date = fmt::date(&order.created_at),
        status = status_tag(order.status),
        total = fmt::money(order.total),
    )
}
