//! Annotated rendering of the persisted configuration document.
//!
//! On write, every field is followed by an inline `// Options:` comment
//! enumerating accepted or representative values, so operators get the
//! permitted value set without separate documentation. The comments are a
//! documentation aid only: on read they are stripped and the remaining
//! plain JSON is what gets parsed.

use super::settings::PerfConfig;

/// Renders `config` as annotated JSON.
pub(crate) fn render_annotated(config: &PerfConfig) -> String {
    format!(
        r#"{{
  "tick": {{
    "maxCatchupMillis": {max_catchup}, // Options: 0 (no catchup), 25 (gentler), 50 (default)
    "jitterClampMs": {jitter} // Options: 0 (no clamp), 5 (tight), 10 (default)
  }},
  "async": {{
    "workerThreads": {threads}, // Options: 1 (minimal), 2 (default), 4 (busier CPUs)
    "maxQueue": {queue} // Options: 128 (strict), 512 (default), 1024 (burstier)
  }},
  "entities": {{
    "softCapPerChunk": {soft_cap}, // Options: 20 (tighter), 35 (default), 50 (looser)
    "distantAiSkipEvery": {skip} // Options: 2 (more AI), 4 (default), 8 (fewer AI ticks)
  }},
  "network": {{
    "packetBurstLimit": {burst}, // Options: 128 (strict), 256 (default), 512 (looser)
    "coalesceChatMs": {coalesce} // Options: 0 (off), 50 (tighter), 75 (default)
  }},
  "world": {{
    "autosaveMinutes": {autosave}, // Options: 5 (frequent), 10 (default), 30 (light)
    "staggerSaves": {stagger} // Options: true (default), false (single burst)
  }},
  "particles": {{
    "densityScalar": {density}, // Options: 0.6 (low), 0.85 (default), 1.0 (full)
    "applyToProjectiles": {projectiles} // Options: true (default), false (leave projectiles untouched)
  }},
  "bundled": {{
    "aggressiveTrimming": {aggressive}, // Options: false (default), true (heavier culling)
    "lowAiDepth": {low_ai} // Options: false (default), true (lighter AI for perf)
  }}
}}
"#,
        max_catchup = config.tick.max_catchup_millis,
        jitter = config.tick.jitter_clamp_ms,
        threads = config.async_pool.worker_threads,
        queue = config.async_pool.max_queue,
        soft_cap = config.entities.soft_cap_per_chunk,
        skip = config.entities.distant_ai_skip_every,
        burst = config.network.packet_burst_limit,
        coalesce = config.network.coalesce_chat_ms,
        autosave = config.world.autosave_minutes,
        stagger = config.world.stagger_saves,
        density = config.particles.density_scalar,
        projectiles = config.particles.apply_to_projectiles,
        aggressive = config.bundled.aggressive_trimming,
        low_ai = config.bundled.low_ai_depth,
    )
}

/// Removes `//` line comments outside of string literals.
///
/// Keeps newlines so parse errors still point at sensible line numbers.
pub(crate) fn strip_line_comments(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            output.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                output.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                // Drop everything to (but not including) the end of line.
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        output.push('\n');
                        break;
                    }
                }
            }
            _ => output.push(c),
        }
    }

    output
}
