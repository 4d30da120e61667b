//! Transaction extra field parsing and serialization.
//!
//! Implements the CryptoNote/Shade tx_extra format:
//! - Tag 0x00: Padding
//! - Tag 0x01: Shared transaction pubkey (32 bytes)
//! - Tag 0x02: Nonce (1-byte size + data; contains payment ID)
//! - Tag 0x03: Merge mining (varint size + data)
//! - Tag 0x04: Additional per-output pubkeys (1-byte count + 32*N bytes)
//! - Tag 0xDE: Minergate (varint size + data)
//! - Unknown: varint size + data fallback
//!
//! The critical tag 0x01 vs 0x04 selection logic matches C++
//! `store_carrot_ephemeral_pubkeys_to_extra()` from format_utils.cpp:61.

/// Decode a varint (LEB128) from bytes at offset.
/// Returns (value, bytes_read). Max 10 bytes / 70 bits.
pub(crate) fn decode_varint(data: &[u8], offset: usize) -> Option<(u64, usize)> {
    let mut value: u64 = 0;
    let mut shift: u32 = 0;
    let mut i = 0;
    loop {
        if offset + i >= data.len() {
            return None;
        }
        let byte = data[offset + i];
        i += 1;
        value |= ((byte & 0x7F) as u64) << shift;
        if byte & 0x80 == 0 {
            break;
        }
        shift += 7;
        if shift >= 70 {
            return None; // overflow
        }
    }
    Some((value, i))
}

/// Encode a u64 value as varint (LEB128).
pub(crate) fn encode_varint(mut value: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(10);
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            break;
        }
        buf.push(byte | 0x80);
    }
    buf
}

/// Parse tx_extra field from binary into JSON string.
///
/// Returns a JSON array of objects, each with:
/// - `type`: numeric tag
/// - `tag`: string name
/// - Additional fields depending on tag type
///
/// Keys/data are hex-encoded strings in the JSON output.
pub fn parse_extra(extra_bytes: &[u8]) -> String {
    let mut entries = Vec::new();
    let mut offset = 0;

    while offset < extra_bytes.len() {
        let tag = extra_bytes[offset];
        offset += 1;

        match tag {
            0x00 => {
                // Padding: skip consecutive 0x00 bytes
                while offset < extra_bytes.len() && extra_bytes[offset] == 0x00 {
                    offset += 1;
                }
                entries.push(serde_json::json!({
                    "type": 0x00,
                    "tag": "padding"
                }));
            }
            0x01 => {
                // TX_EXTRA_TAG_PUBKEY: 32-byte key
                if offset + 32 > extra_bytes.len() {
                    entries.push(serde_json::json!({
                        "type": 0x01,
                        "tag": "tx_pubkey",
                        "error": "truncated"
                    }));
                    break;
                }
                let key = hex::encode(&extra_bytes[offset..offset + 32]);
                offset += 32;
                entries.push(serde_json::json!({
                    "type": 0x01,
                    "tag": "tx_pubkey",
                    "key": key
                }));
            }
            0x02 => {
                // TX_EXTRA_NONCE: 1-byte size + data
                if offset >= extra_bytes.len() {
                    break;
                }
                let nonce_size = extra_bytes[offset] as usize;
                offset += 1;
                if offset + nonce_size > extra_bytes.len() {
                    entries.push(serde_json::json!({
                        "type": 0x02,
                        "tag": "nonce",
                        "error": "truncated"
                    }));
                    break;
                }
                let nonce = &extra_bytes[offset..offset + nonce_size];
                offset += nonce_size;

                // Parse nonce content
                let nonce_entry = parse_extra_nonce(nonce);
                entries.push(nonce_entry);
            }
            0x03 => {
                // TX_EXTRA_MERGE_MINING_TAG: varint size + data
                match decode_varint(extra_bytes, offset) {
                    Some((size, bytes_read)) => {
                        offset += bytes_read;
                        let size = size as usize;
                        if offset + size > extra_bytes.len() {
                            break;
                        }
                        let data = hex::encode(&extra_bytes[offset..offset + size]);
                        offset += size;
                        entries.push(serde_json::json!({
                            "type": 0x03,
                            "tag": "merge_mining",
                            "data": data
                        }));
                    }
                    None => break,
                }
            }
            0x04 => {
                // TX_EXTRA_TAG_ADDITIONAL_PUBKEYS: 1-byte count + 32*N bytes
                if offset >= extra_bytes.len() {
                    break;
                }
                let count = extra_bytes[offset] as usize;
                offset += 1;
                let mut keys = Vec::with_capacity(count);
                for _ in 0..count {
                    if offset + 32 > extra_bytes.len() {
                        break;
                    }
                    keys.push(hex::encode(&extra_bytes[offset..offset + 32]));
                    offset += 32;
                }
                entries.push(serde_json::json!({
                    "type": 0x04,
                    "tag": "additional_pubkeys",
                    "keys": keys
                }));
            }
            0xDE => {
                // TX_EXTRA_MYSTERIOUS_MINERGATE_TAG: varint size + data
                match decode_varint(extra_bytes, offset) {
                    Some((size, bytes_read)) => {
                        let size = size as usize;
                        if offset + bytes_read + size <= extra_bytes.len() {
                            let data = hex::encode(
                                &extra_bytes[offset + bytes_read..offset + bytes_read + size],
                            );
                            offset += bytes_read + size;
                            entries.push(serde_json::json!({
                                "type": 0xDE,
                                "tag": "minergate",
                                "data": data
                            }));
                        } else {
                            offset = extra_bytes.len();
                        }
                    }
                    None => {
                        offset = extra_bytes.len();
                    }
                }
            }
            _ => {
                // Unknown tag — try varint-length skip
                let mut skipped = false;
                if offset < extra_bytes.len() {
                    if let Some((size, bytes_read)) = decode_varint(extra_bytes, offset) {
                        let size = size as usize;
                        if offset + bytes_read + size <= extra_bytes.len() {
                            let data = hex::encode(
                                &extra_bytes[offset + bytes_read..offset + bytes_read + size],
                            );
                            offset += bytes_read + size;
                            entries.push(serde_json::json!({
                                "type": tag,
                                "tag": "unknown",
                                "data": data
                            }));
                            skipped = true;
                        }
                    }
                }
                if !skipped {
                    entries.push(serde_json::json!({
                        "type": tag,
                        "tag": "unknown",
                        "offset": offset - 1
                    }));
                    offset = extra_bytes.len();
                }
            }
        }
    }

    serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
}

/// Parse nonce content (inner of tag 0x02).
fn parse_extra_nonce(nonce: &[u8]) -> serde_json::Value {
    if nonce.is_empty() {
        return serde_json::json!({
            "type": 0x02,
            "tag": "nonce",
            "raw": hex::encode(nonce)
        });
    }

    match nonce[0] {
        0x00 if nonce.len() == 33 => {
            // Unencrypted payment ID (32 bytes)
            serde_json::json!({
                "type": 0x02,
                "tag": "nonce",
                "paymentIdType": "unencrypted",
                "paymentId": hex::encode(&nonce[1..])
            })
        }
        0x01 if nonce.len() == 9 => {
            // Encrypted payment ID (8 bytes)
            serde_json::json!({
                "type": 0x02,
                "tag": "nonce",
                "paymentIdType": "encrypted",
                "paymentId": hex::encode(&nonce[1..])
            })
        }
        _ => {
            serde_json::json!({
                "type": 0x02,
                "tag": "nonce",
                "raw": hex::encode(nonce)
            })
        }
    }
}

/// Serialize tx_extra from JSON string to binary.
///
/// Input JSON object:
/// - `txPubKey`: hex string (optional, 32-byte shared pubkey)
/// - `additionalPubKeys`: array of hex strings (optional, per-output pubkeys)
/// - `paymentId`: hex string (optional, 8-byte encrypted payment ID)
///
/// Tag selection logic matches C++ store_carrot_ephemeral_pubkeys_to_extra():
/// - 1 output or no additional keys: use tag 0x01 (shared)
/// - 2 outputs with identical D_e: use tag 0x01 (shared)
/// - 2+ outputs with different D_e or 3+ outputs: use tag 0x04 only (no 0x01)
pub fn serialize_tx_extra(json_str: &str) -> Result<Vec<u8>, String> {
    let json: serde_json::Value =
        serde_json::from_str(json_str).map_err(|e| format!("JSON parse error: {e}"))?;

    let mut result = Vec::new();

    // Get additional pubkeys
    let additional_keys: Vec<Vec<u8>> = json
        .get("additionalPubKeys")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().and_then(|s| hex::decode(s).ok()))
                .collect()
        })
        .unwrap_or_default();

    // Determine tag 0x01 vs 0x04
    let mut use_shared = true;
    if additional_keys.len() >= 3 {
        use_shared = false;
    } else if additional_keys.len() == 2 {
        use_shared = additional_keys[0] == additional_keys[1];
    }

    if use_shared {
        // Tag 0x01: shared ephemeral pubkey
        let pubkey = json
            .get("txPubKey")
            .and_then(|v| v.as_str())
            .and_then(|s| hex::decode(s).ok())
            .or_else(|| additional_keys.first().cloned());

        if let Some(pk) = pubkey {
            if pk.len() == 32 {
                result.push(0x01);
                result.extend_from_slice(&pk);
            }
        }
    } else {
        // Tag 0x04: per-output ephemeral pubkeys (no tag 0x01)
        result.push(0x04);
        result.extend_from_slice(&encode_varint(additional_keys.len() as u64));
        for pk in &additional_keys {
            result.extend_from_slice(pk);
        }
    }

    // Tag 0x02: encrypted payment ID
    if let Some(pid_hex) = json.get("paymentId").and_then(|v| v.as_str()) {
        if let Ok(pid) = hex::decode(pid_hex) {
            if pid.len() == 8 {
                result.push(0x02); // nonce tag
                result.push(9); // nonce length: 1 (type) + 8 (pid)
                result.push(0x01); // encrypted payment ID type
                result.extend_from_slice(&pid);
            }
        }
    }

    Ok(result)
}

/// Compute keccak256 hash of raw transaction prefix bytes.
pub fn compute_tx_prefix_hash(data: &[u8]) -> [u8; 32] {
    crate::keccak256_internal(data)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
