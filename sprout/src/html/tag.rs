use crate::node::Node;

macro_rules! make_tags {
    ($($method:ident, $method_with:ident => $tag:literal;)*) => {
        /// Shorthand child constructors named after HTML elements.
        ///
        /// `node.div()` is `node.add("div")`, `node.div_with(attrs)` is
        /// `node.add_with("div", attrs)`. `<mark>` and `<label>` share their names with
        /// [`Node`] methods and have no shorthand; use [`Node::add`] for those and for
        /// anything else not listed here.
        pub trait HtmlTags {
            $(
                #[doc = concat!("Appends a `<", $tag, ">` child and returns it.")]
                fn $method(&self) -> Node;

                #[doc = concat!("Appends a `<", $tag, ">` child with `attributes` and returns it.")]
                fn $method_with(&self, attributes: impl Into<String>) -> Node;
            )*
        }

        impl HtmlTags for Node {
            $(
                fn $method(&self) -> Node {
                    self.add($tag)
                }

                fn $method_with(&self, attributes: impl Into<String>) -> Node {
                    self.add_with($tag, attributes)
                }
            )*
        }
    };
}

make_tags! {
    html, html_with => "html";
    head, head_with => "head";
    body, body_with => "body";
    title, title_with => "title";
    base, base_with => "base";
    meta, meta_with => "meta";
    link, link_with => "link";
    style, style_with => "style";
    script, script_with => "script";
    noscript, noscript_with => "noscript";
    template, template_with => "template";
    slot, slot_with => "slot";
    div, div_with => "div";
    span, span_with => "span";
    p, p_with => "p";
    a, a_with => "a";
    h1, h1_with => "h1";
    h2, h2_with => "h2";
    h3, h3_with => "h3";
    h4, h4_with => "h4";
    h5, h5_with => "h5";
    h6, h6_with => "h6";
    header, header_with => "header";
    footer, footer_with => "footer";
    main, main_with => "main";
    nav, nav_with => "nav";
    section, section_with => "section";
    article, article_with => "article";
    aside, aside_with => "aside";
    address, address_with => "address";
    blockquote, blockquote_with => "blockquote";
    details, details_with => "details";
    summary, summary_with => "summary";
    dialog, dialog_with => "dialog";
    menu, menu_with => "menu";
    figure, figure_with => "figure";
    figcaption, figcaption_with => "figcaption";
    ul, ul_with => "ul";
    ol, ol_with => "ol";
    li, li_with => "li";
    dl, dl_with => "dl";
    dt, dt_with => "dt";
    dd, dd_with => "dd";
    table, table_with => "table";
    thead, thead_with => "thead";
    tbody, tbody_with => "tbody";
    tfoot, tfoot_with => "tfoot";
    tr, tr_with => "tr";
    th, th_with => "th";
    td, td_with => "td";
    form, form_with => "form";
    input, input_with => "input";
    button, button_with => "button";
    select, select_with => "select";
    option, option_with => "option";
    textarea, textarea_with => "textarea";
    img, img_with => "img";
    audio, audio_with => "audio";
    video, video_with => "video";
    source, source_with => "source";
    track, track_with => "track";
    canvas, canvas_with => "canvas";
    svg, svg_with => "svg";
    iframe, iframe_with => "iframe";
    embed, embed_with => "embed";
    object, object_with => "object";
    map, map_with => "map";
    area, area_with => "area";
    b, b_with => "b";
    strong, strong_with => "strong";
    i, i_with => "i";
    em, em_with => "em";
    small, small_with => "small";
    del, del_with => "del";
    ins, ins_with => "ins";
    sub, sub_with => "sub";
    sup, sup_with => "sup";
    pre, pre_with => "pre";
    code, code_with => "code";
    kbd, kbd_with => "kbd";
    samp, samp_with => "samp";
    var, var_with => "var";
    q, q_with => "q";
    cite, cite_with => "cite";
    abbr, abbr_with => "abbr";
    time, time_with => "time";
    progress, progress_with => "progress";
    meter, meter_with => "meter";
    br, br_with => "br";
    hr, hr_with => "hr";
    wbr, wbr_with => "wbr";
}
