/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - この backend は stateless（route table は起動後 read-only、request 間で共有する
 *   リソースなし）なので、今は空。DB pool や上流クライアントが増えたらここに足す
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
#[derive(Clone, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}
