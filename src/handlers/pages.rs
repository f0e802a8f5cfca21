use actix_web::{HttpResponse, web};

use crate::catalog::{self, WHATSAPP_SUPPORT_URL};
use crate::config::Config;
use crate::models::rating_label;
use crate::utils::{format_price, is_valid_token};

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: linear-gradient(135deg, #fdf2f8, #fff, #faf5ff); color: #111827; }
.page { max-width: 640px; margin: 0 auto; padding: 48px 16px; text-align: center; }
.card { background: #fff; border: 1px solid #fbcfe8; border-radius: 12px; padding: 24px; margin: 16px 0; box-shadow: 0 1px 4px rgba(0,0,0,0.06); }
.card h3 { margin: 0 0 4px; }
.price { font-size: 1.5rem; font-weight: 700; color: #db2777; }
button { cursor: pointer; border: 0; border-radius: 8px; padding: 12px 24px; font-size: 1rem; }
.primary { background: linear-gradient(90deg, #ec4899, #9333ea); color: #fff; }
.danger { background: #ef4444; color: #fff; }
.ghost { background: rgba(255,255,255,0.12); color: #fff; }
a.support { color: #6b7280; font-size: 0.9rem; }
.call { background: #000; color: #fff; min-height: 100vh; display: flex; flex-direction: column; }
.call video { width: 100%; flex: 1; object-fit: cover; }
.call-header { display: flex; align-items: center; gap: 8px; padding: 12px 16px; }
.call-controls { display: flex; justify-content: center; gap: 12px; padding: 16px; }
.online-dot { width: 8px; height: 8px; border-radius: 50%; background: #22c55e; display: inline-block; }
.stars button { background: none; font-size: 2rem; padding: 4px; }
.stars button.off { filter: grayscale(1); opacity: 0.4; }
textarea { width: 100%; min-height: 96px; border: 1px solid #e5e7eb; border-radius: 8px; padding: 8px; box-sizing: border-box; }
.hidden { display: none; }
"#;

const HOME_JS: &str = r#"
async function buyPlan(planId) {
  try {
    const response = await fetch('/api/v1/checkout', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ planId })
    });
    const data = await response.json();
    if (response.ok && data.url) {
      window.location.href = data.url;
    } else {
      alert((data.error && data.error.message) || 'Erro ao iniciar o pagamento');
    }
  } catch (e) {
    alert('Erro ao iniciar o pagamento');
  }
}
document.querySelectorAll('button[data-plan]').forEach((el) => {
  el.addEventListener('click', () => buyPlan(el.dataset.plan));
});
"#;

const SUCCESS_JS: &str = r#"
async function verifyPayment() {
  const sessionId = new URLSearchParams(window.location.search).get('session_id');
  const status = document.getElementById('status');
  if (!sessionId) {
    status.textContent = 'Ops! Algo deu errado';
    return;
  }
  try {
    const response = await fetch('/api/v1/verify-payment', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ sessionId })
    });
    const data = await response.json();
    if (response.ok && data.success) {
      status.textContent = 'Pagamento confirmado!';
      document.getElementById('detail').textContent =
        'Você será redirecionado em instantes para a sua sala privada.';
      setTimeout(() => { window.location.href = '/call/' + data.sessionToken; }, 3000);
    } else {
      status.textContent = (data.error && data.error.message) || 'Erro ao verificar pagamento';
      document.getElementById('home-link').classList.remove('hidden');
    }
  } catch (e) {
    status.textContent = 'Erro ao processar pagamento';
    document.getElementById('home-link').classList.remove('hidden');
  }
}
verifyPayment();
"#;

const CALL_JS: &str = r#"
const video = document.getElementById('call-video');
document.getElementById('mute').addEventListener('click', () => {
  video.muted = !video.muted;
  document.getElementById('mute').textContent = video.muted ? 'Ativar som' : 'Mudo';
});
document.getElementById('fullscreen').addEventListener('click', () => {
  if (!document.fullscreenElement) {
    document.documentElement.requestFullscreen();
  } else {
    document.exitFullscreen();
  }
});
document.getElementById('end-call').addEventListener('click', () => {
  window.location.href = '/feedback';
});
"#;

// Submission only flips local state. No request leaves the page.
const FEEDBACK_JS: &str = r#"
let rating = 0;
const labelEl = document.getElementById('rating-label');
document.querySelectorAll('.stars button').forEach((el) => {
  el.addEventListener('click', () => {
    rating = Number(el.dataset.rating);
    labelEl.textContent = RATING_LABELS[rating - 1];
    document.querySelectorAll('.stars button').forEach((other) => {
      other.classList.toggle('off', Number(other.dataset.rating) > rating);
    });
    document.getElementById('submit').disabled = false;
  });
});
document.getElementById('submit').addEventListener('click', () => {
  document.getElementById('form-view').classList.add('hidden');
  document.getElementById('submitted-view').classList.remove('hidden');
});
"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"pt-BR\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title}</title><style>{STYLE}</style></head><body>{body}</body></html>"
    )
}

fn html_response(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

pub async fn home() -> HttpResponse {
    let cards: String = catalog::plans()
        .iter()
        .map(|plan| {
            format!(
                "<div class=\"card\"><h3>{}</h3><p>{}</p>\
                 <p class=\"price\">{}</p>\
                 <button class=\"primary\" data-plan=\"{}\">Comprar</button></div>",
                plan.name,
                plan.description,
                format_price(plan.price_cents),
                plan.id
            )
        })
        .collect();

    let body = format!(
        "<div class=\"page\"><h1>Sorrisinho Call 💕</h1>\
         <p>Escolha quanto tempo você quer passar comigo:</p>\
         {cards}<script>{HOME_JS}</script></div>"
    );
    html_response(layout("Sorrisinho Call", &body))
}

pub async fn success() -> HttpResponse {
    let body = format!(
        "<div class=\"page\"><div class=\"card\">\
         <h2 id=\"status\">Verificando pagamento...</h2>\
         <p id=\"detail\">Aguarde enquanto confirmamos sua compra</p>\
         <a id=\"home-link\" class=\"hidden\" href=\"/\"><button class=\"primary\">Voltar ao início</button></a>\
         </div><script>{SUCCESS_JS}</script></div>"
    );
    html_response(layout("Pagamento", &body))
}

/// Call access gate. The only validity check is the token length heuristic;
/// there is no lookup against issued sessions and no expiry check.
pub async fn call(path: web::Path<String>) -> HttpResponse {
    let token = path.into_inner();
    if !is_valid_token(&token) {
        let body = "<div class=\"page\"><div class=\"card\">\
             <h2>Sessão inválida</h2>\
             <p>Esta sessão expirou ou não é válida. Por favor, faça uma nova compra.</p>\
             <a href=\"/\"><button class=\"primary\">Voltar ao início</button></a>\
             </div></div>";
        return html_response(layout("Sessão inválida", body));
    }

    let body = format!(
        "<div class=\"call\">\
         <div class=\"call-header\"><strong>Sorrisinho</strong>\
         <span class=\"online-dot\"></span><span>Online</span></div>\
         <video id=\"call-video\" autoplay loop playsinline>\
         <source src=\"/api/video/stream\" type=\"video/mp4\">\
         Seu navegador não suporta vídeo HTML5.</video>\
         <div class=\"call-controls\">\
         <button id=\"mute\" class=\"ghost\">Mudo</button>\
         <button id=\"fullscreen\" class=\"ghost\">Tela cheia</button>\
         <button id=\"end-call\" class=\"danger\">Encerrar</button>\
         </div>\
         <p style=\"text-align:center\"><a class=\"support\" href=\"{WHATSAPP_SUPPORT_URL}\" target=\"_blank\" rel=\"noopener noreferrer\">Suporte</a></p>\
         <script>{CALL_JS}</script></div>"
    );
    html_response(layout("Chamada", &body))
}

pub async fn feedback() -> HttpResponse {
    let labels: Vec<&str> = (1u8..=5).filter_map(rating_label).collect();
    let labels_json = serde_json::to_string(&labels).unwrap_or_else(|_| "[]".to_string());

    let stars: String = (1..=5)
        .map(|rating| format!("<button data-rating=\"{rating}\">⭐</button>"))
        .collect();

    let body = format!(
        "<div class=\"page\">\
         <div id=\"form-view\" class=\"card\">\
         <h2>Como foi sua experiência?</h2>\
         <p>Avalie nossa chamada:</p>\
         <div class=\"stars\">{stars}</div>\
         <p id=\"rating-label\"></p>\
         <textarea placeholder=\"Conte-me como foi sua experiência... (opcional)\"></textarea>\
         <p><button id=\"submit\" class=\"primary\" disabled>Enviar feedback</button></p>\
         </div>\
         <div id=\"submitted-view\" class=\"card hidden\">\
         <h2>Obrigada pelo feedback!</h2>\
         <p>Sua opinião é muito importante para nós. Esperamos vê-lo novamente em breve!</p>\
         <a href=\"/\"><button class=\"primary\">Nova chamada</button></a>\
         </div>\
         <a class=\"support\" href=\"{WHATSAPP_SUPPORT_URL}\" target=\"_blank\" rel=\"noopener noreferrer\">Falar com suporte</a>\
         <script>const RATING_LABELS = {labels_json};{FEEDBACK_JS}</script></div>"
    );
    html_response(layout("Feedback", &body))
}

/// The call room's video source. Delivery itself is external; this just points
/// the player at the configured asset.
pub async fn video_stream(config: web::Data<Config>) -> HttpResponse {
    HttpResponse::Found()
        .append_header(("Location", config.video.stream_url.clone()))
        .finish()
}

pub fn pages_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/success", web::get().to(success))
        .route("/call/{token}", web::get().to(call))
        .route("/feedback", web::get().to(feedback))
        .route("/api/video/stream", web::get().to(video_stream));
}
